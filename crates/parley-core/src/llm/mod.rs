mod traits;
mod model;
mod openai;
mod title;

pub use traits::*;
pub use model::ChatModel;
pub use openai::OpenAIClient;
pub use title::suggest_title;
