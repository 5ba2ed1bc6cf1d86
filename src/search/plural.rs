use crate::dictionary::WordMembership;

/// Plural heuristic: `word` ends in `S` and the word without that `S` is
/// itself in the dictionary.
///
/// This is a spelling check, not morphology. "GLASS" counts as a plural of
/// "GLAS" if that happens to be listed, and irregular plurals like "MICE"
/// are never caught.
pub fn is_plural<D: WordMembership + ?Sized>(word: &str, dictionary: &D) -> bool {
    word.strip_suffix('S').is_some_and(|stem| dictionary.contains(stem))
}
