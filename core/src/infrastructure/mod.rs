pub mod gateway;
pub mod llm;
pub mod storage;
