//! Word document (`.docx`) → plain text.
//!
//! A `.docx` file is a zip container; the body lives in `word/document.xml`.
//! Text runs (`<w:t>`) are concatenated, each paragraph (`</w:p>`) ends with a
//! newline, `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a newline.
//! Paragraph properties (`<w:pPr>`) are skipped; their `<w:tab>` elements are
//! tab-stop definitions, not text.

use std::{fs::File, io::Read, path::Path, sync::OnceLock};

use regex::Regex;

use crate::errors::CorpusError;

const DOCUMENT_PART: &str = "word/document.xml";

fn paragraph_props() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:pPr\b[^>]*/>|<w:pPr\b[^>]*>.*?</w:pPr>")
            .expect("valid docx pPr regex")
    })
}

/// Self-closing `<w:t/>` runs match first and carry no group.
fn tokens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)<w:t(?:\s[^>]*)?/>|<w:t(?:\s[^>]*)?>(?P<run>.*?)</w:t>|<w:(?P<ctrl>tab|br|cr)\b[^>]*/>|(?P<para></w:p>)",
        )
        .expect("valid docx token regex")
    })
}

/// Extracts the raw text of the Word document at `path`.
///
/// # Errors
/// [`CorpusError::Io`] if the file cannot be opened, [`CorpusError::Docx`] if it
/// is not a zip container or has no `word/document.xml` part.
pub fn extract_file(path: &Path) -> Result<String, CorpusError> {
    let docx_err = |reason: String| CorpusError::Docx {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| docx_err(e.to_string()))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| docx_err(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| docx_err(format!("{DOCUMENT_PART}: {e}")))?;

    Ok(document_xml_to_text(&xml))
}

/// Converts the WordprocessingML body to plain text.
pub fn document_xml_to_text(xml: &str) -> String {
    let body = paragraph_props().replace_all(xml, "");
    let mut out = String::with_capacity(body.len() / 4);

    for caps in tokens().captures_iter(&body) {
        if let Some(run) = caps.name("run") {
            out.push_str(&unescape_xml(run.as_str()));
        } else if let Some(ctrl) = caps.name("ctrl") {
            out.push(if ctrl.as_str() == "tab" { '\t' } else { '\n' });
        } else if caps.name("para").is_some() {
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

/// Resolves the five predefined XML entities and numeric character references.
/// Unknown entities are kept as written.
fn unescape_xml(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_docx;

    #[test]
    fn paragraphs_runs_and_controls() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>Prostate </w:t></w:r><w:r><w:t xml:space="preserve">cancer</w:t></w:r></w:p>
<w:p><w:r><w:t>Stage</w:t><w:tab/><w:t>1</w:t><w:br/><w:t>Early</w:t></w:r></w:p>
<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
</w:body></w:document>"#;
        assert_eq!(
            document_xml_to_text(xml),
            "Prostate cancer\nStage\t1\nEarly\ncell"
        );
    }

    #[test]
    fn empty_self_closing_runs_are_skipped() {
        let xml = r#"<w:p><w:r><w:t xml:space="preserve"/></w:r><w:r><w:t>Hello</w:t></w:r></w:p><w:p><w:r><w:t/><w:t>world</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_to_text(xml), "Hello\nworld");
    }

    #[test]
    fn tab_stop_definitions_are_not_text() {
        let xml = r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="right" w:pos="9360"/></w:tabs></w:pPr><w:r><w:t>Hello</w:t><w:tab/><w:t>GP</w:t></w:r></w:p><w:p><w:pPr/><w:r><w:t>next</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_to_text(xml), "Hello\tGP\nnext");
    }

    #[test]
    fn entities_are_unescaped() {
        assert_eq!(unescape_xml("PSA &lt; 4 &amp; &quot;normal&quot;"), "PSA < 4 & \"normal\"");
        assert_eq!(unescape_xml("&#233;t&#xE9;"), "été");
        assert_eq!(unescape_xml("R&D; &bogus; 50 & up"), "R&D; &bogus; 50 & up");
    }

    #[test]
    fn reads_document_part_from_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stages.docx");
        write_docx(&path, &["Talk to your GP", "Get checked"]);

        let text = extract_file(&path).unwrap();
        assert_eq!(text, "Talk to your GP\nGet checked");
    }

    #[test]
    fn non_zip_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"plain bytes").unwrap();

        let err = extract_file(&path).unwrap_err();
        assert!(matches!(err, CorpusError::Docx { .. }));
    }
}
