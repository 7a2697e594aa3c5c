//! Property tests for masking over generated Logos-like content.

use logos_dialect::{mask, unmask};
use proptest::prelude::*;

/// Pieces that exercise every scanner state and every directive.
const FRAGMENTS: &[&str] = &[
    "%hook SpringBoard",
    "%end",
    "%new",
    "%group iOS14",
    "%subclass LFView : UIView",
    "%property (nonatomic, retain) UIView *badge;",
    "%config(generator=internal)",
    "%hookf(int, puts, const char *s)",
    "%ctor",
    "%dtor",
    "%init",
    "%init(iOS14)",
    "%c(SBIconController)",
    "%orig",
    "%orig(arg)",
    "%log",
    "%",
    "%%",
    "%hooks",
    "%d",
    "x % 3",
    "a%orig",
    "(b)%c",
    "[i]%end",
    "1'000",
    "u8'x'",
    "'%'",
    "\"%@ %c\"",
    "@\"%hook\"",
    "\"",
    "'",
    "\\",
    "//",
    "// %orig",
    "/*",
    "*/",
    "/* %end */",
    ";",
    "{",
    "}",
    "(",
    ")",
    " ",
    "\t",
    "\n",
    "\r\n",
    "é",
    "日本",
    "logosformat",
    "@logosformatorig",
    "@logosformat1end;",
    "- (void)layout",
    "self",
    "_x",
    "42",
];

fn logos_like() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => prop::sample::select(FRAGMENTS).prop_map(str::to_string),
        1 => "\\PC{0,6}",
    ];
    prop::collection::vec(piece, 0..48).prop_map(|pieces| pieces.concat())
}

const DELIMITERS: &[&str] = &["\n", "\r\n", "\"", "'", "//", "/*", "*/", ";", "{", "}"];

/// Arbitrary text where no `%` can start a directive name.
fn directive_free() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => "\\PC{0,12}",
        1 => prop::sample::select(DELIMITERS).prop_map(str::to_string),
    ];
    prop::collection::vec(piece, 0..32).prop_map(|pieces| pieces.concat().replace('%', "%5"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn unmask_restores_masked_content(content in logos_like()) {
        let masked = mask(&content);
        prop_assert_eq!(unmask(&masked.content, &masked.markers).unwrap(), content);
    }

    #[test]
    fn mask_is_identity_without_directives(content in directive_free()) {
        let masked = mask(&content);
        prop_assert!(masked.markers.is_empty());
        prop_assert_eq!(masked.content, content);
    }

    #[test]
    fn markers_cover_each_directive_once(content in logos_like()) {
        let masked = mask(&content);
        for marker in masked.markers.iter() {
            prop_assert_eq!(&content[marker.span.clone()], marker.directive.to_string());
        }
        let sigil_count = masked.content.matches(&format!("@{}", masked.markers.sigil())).count();
        prop_assert_eq!(sigil_count, masked.markers.len());
    }
}
