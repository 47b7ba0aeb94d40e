/// Use cases module containing application logic orchestration
mod read_text;

pub use read_text::ReadTextUseCase;
