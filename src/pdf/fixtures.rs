//! Generated PDF fixtures for tests

/// Build a small, well-formed PDF with one page per `(width, height)` entry
/// (in points). Each page carries a filled rectangle so it is not blank.
pub fn sample_pdf(pages: &[(u32, u32)]) -> Vec<u8> {
    let page_count = pages.len();
    // Objects: 1 catalog, 2 page tree, then a (page, content) pair per page
    let mut objects: Vec<String> = Vec::with_capacity(2 + page_count * 2);

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 3 + i * 2))
        .collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_count
    ));

    for (i, (width, height)) in pages.iter().enumerate() {
        let content_id = 4 + i * 2;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources << >> >>",
            width, height, content_id
        ));
        let stream = "0 0 1 rg 10 10 40 40 re f";
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}
