// Configuration for the sentcount shell
// Defaults match the interactive behaviour; CLI flags override them

/// Shell behaviour around the tokenizer and counter
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Appended when the entered text lacks a sentence terminator (default '.')
    pub terminator: char,

    /// Upper bound on how many query words one session accepts (default 1000)
    pub max_queries: usize,

    /// Print the tokenized sentences before the counts (default false)
    pub show_sentences: bool,

    /// Colour notices and results on a terminal (default true)
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            terminator: '.',
            max_queries: 1000,
            show_sentences: false,
            color: true,
        }
    }
}
