/// Terminal error taxonomy for crossword construction.
///
/// Per-attempt failures inside the fill engine never surface as these; the
/// retry controller recovers them and only raises [`CrosswordError::Fill`]
/// once every retry is spent. Boundary validation errors surface
/// immediately.
#[derive(Debug, thiserror::Error)]
pub enum CrosswordError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("template generation exhausted its budget after {attempts} attempts")]
    Template { attempts: usize },

    #[error("no complete fill found after {attempts} attempts (best attempt placed {best_words} words)")]
    Fill { attempts: usize, best_words: usize },

    #[error("best attempt placed only {placed} words (minimum {minimum} required)")]
    Placement { placed: usize, minimum: usize },

    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
