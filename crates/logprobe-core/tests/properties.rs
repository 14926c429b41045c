use logprobe_core::{extended_context, scan_keywords, Document, ScanOptions, SourceEncoding};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_valid_utf8_decodes_as_utf8(s in "\\PC{0,200}") {
        let doc = Document::from_bytes(s.as_bytes());
        prop_assert_eq!(doc.encoding(), SourceEncoding::Utf8);
        prop_assert_eq!(doc.char_len(), s.chars().count());
    }

    #[test]
    fn prop_any_bytes_decode(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let doc = Document::from_bytes(&bytes);
        prop_assert!(!doc.text().contains('\r'));
        prop_assert_eq!(doc.byte_len(), bytes.len());
        match doc.encoding() {
            SourceEncoding::Utf8 => {
                let expected = std::str::from_utf8(&bytes).unwrap().replace("\r\n", "\n").replace('\r', "\n");
                prop_assert_eq!(doc.text(), expected.as_str());
            }
            SourceEncoding::Latin1 => {
                prop_assert!(std::str::from_utf8(&bytes).is_err());
                let crlf = bytes.windows(2).filter(|w| *w == b"\r\n").count();
                prop_assert_eq!(doc.char_len(), bytes.len() - crlf);
            }
            SourceEncoding::Utf16Le | SourceEncoding::Utf16Be => {
                prop_assert!(std::str::from_utf8(&bytes).is_err());
            }
        }
    }

    #[test]
    fn prop_count_equals_str_matches(text in "[ab\\n]{0,300}", kw in "[ab]{1,3}") {
        let doc = Document::from(text.as_str());
        let reports = scan_keywords(&doc, &[kw.as_str()], &ScanOptions::default()).unwrap();
        let r = &reports[0];
        let expected = text.matches(kw.as_str()).count();
        prop_assert_eq!(r.count, expected);
        prop_assert_eq!(r.snippets.len(), expected.min(5));
    }

    #[test]
    fn prop_snippets_follow_advance_by_one_sequence(text in "[ab]{0,120}", kw in "[ab]{1,3}") {
        let doc = Document::from(text.as_str());
        let r = &scan_keywords(&doc, &[kw.as_str()], &ScanOptions::default()).unwrap()[0];
        let mut from = 0usize;
        for s in &r.snippets {
            let idx = from + text[from..].find(kw.as_str()).unwrap();
            prop_assert_eq!(s.char_offset, idx);
            from = idx + 1;
        }
    }

    #[test]
    fn prop_windows_stay_in_bounds(
        prefix in "[x경\\r\\n]{0,150}",
        suffix in "[y고\\r\\n]{0,150}",
    ) {
        let text = format!("{prefix}error{suffix}");
        let doc = Document::from(text.as_str());
        let r = &scan_keywords(&doc, &["error"], &ScanOptions::default()).unwrap()[0];
        let s = &r.snippets[0];
        let total = text.chars().count();
        let at = s.char_offset;
        let start = at.saturating_sub(100);
        let end = (at + 100).min(total);
        prop_assert_eq!(s.text.chars().count(), end - start);
        prop_assert!(!s.text.contains('\n') && !s.text.contains('\r'));

        let w = extended_context(&doc, "error", 500).unwrap();
        prop_assert_eq!(w, text.as_str());
    }
}
