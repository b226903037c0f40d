use crate::core::errors::Result;

/// Port for asking the person driving the run.
///
/// The pipeline suspends at each call and resumes with the typed
/// answer, which makes the whole flow testable by substituting a
/// scripted implementation. The console implementation lives in
/// `adapters::operator`.
pub trait Operator: Send + Sync {
    /// Yes/no question. `default` is the answer for an empty reply.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick exactly one of `options`. `default` indexes into `options`.
    fn choose_one(&self, prompt: &str, options: &[String], default: usize) -> Result<String>;

    /// Pick any subset of `options`, possibly empty.
    fn choose_many(&self, prompt: &str, options: &[String]) -> Result<Vec<String>>;

    /// Free-form text answer.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Display a message without asking anything.
    fn show(&self, message: &str);
}
