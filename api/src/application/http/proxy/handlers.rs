pub mod forward_prompt;
