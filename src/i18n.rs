/// Key of the placeholder shown while the first picture loads
pub const LOADING: &str = "LOADING";

/// Resolves a translation key for a language code such as `"de"` or `"fr-CA"`.
///
/// Unknown languages fall back to English; unknown keys are returned as-is.
pub fn translate(language: &str, key: &str) -> String {
    let lang = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    lookup(&lang, key)
        .or_else(|| lookup("en", key))
        .map_or_else(|| key.to_string(), str::to_string)
}

fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    match (lang, key) {
        ("en", LOADING) => Some("Loading …"),
        ("de", LOADING) => Some("Lade …"),
        ("fr", LOADING) => Some("Chargement …"),
        ("es", LOADING) => Some("Cargando …"),
        ("it", LOADING) => Some("Caricamento …"),
        ("nl", LOADING) => Some("Bezig met laden …"),
        ("sv", LOADING) => Some("Laddar …"),
        ("pt", LOADING) => Some("A carregar …"),
        _ => None,
    }
}
