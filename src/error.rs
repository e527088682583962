use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("{_0}")]
    Custom(String),

    #[display("IO error: {_0}")]
    #[from]
    Io(std::io::Error),

    #[display("OpenAI error: {_0}")]
    #[from]
    OpenAI(async_openai::error::OpenAIError),

    #[display("HTTP error: {_0}")]
    #[from]
    Http(reqwest::Error),

    #[display("PDF error: {_0}")]
    #[from]
    Pdf(printpdf::Error),

    #[display("Audio error: {_0}")]
    #[from]
    Wav(hound::Error),
}

impl Error {
    pub fn custom(msg: impl Into<String>) -> Self {
        Error::Custom(msg.into())
    }
}

impl std::error::Error for Error {}
