//! Gallery caption derivation.
//!
//! Scanned images carry no authored captions, so one is derived from the
//! filename. Projects that need better captions declare an explicit
//! `images` list instead.

/// Derive a human-readable caption from an image filename.
///
/// Convention: drop the final extension, turn `-` and `_` into spaces,
/// then title-case the result.
///
/// # Examples
///
/// ```
/// use folio_core::caption::alt_text;
///
/// assert_eq!(alt_text("01-a.png"), "01 A");
/// assert_eq!(alt_text("speaker-enclosure.png"), "Speaker Enclosure");
/// assert_eq!(alt_text("vr_hand-view.jpeg"), "Vr Hand View");
/// ```
pub fn alt_text(file_name: &str) -> String {
    // Strip the last extension only; "site.v2.png" keeps its "v2".
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    title_case(&stem.replace(['-', '_'], " "))
}

/// Title-case `s`: an alphabetic character at the start of a run is
/// uppercased, the rest of the run is lowercased, everything else passes
/// through. Runs restart after any non-alphabetic character, so digits
/// split words: `"mk2 frame"` becomes `"Mk2 Frame"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }

    out
}
