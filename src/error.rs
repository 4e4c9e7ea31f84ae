#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
