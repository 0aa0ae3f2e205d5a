/// Preamble sent ahead of every user prompt. The backend's output quality depends on this exact
/// wording; it ends with the continuation cue, so the user prompt follows with no delimiter.
pub const INSTRUCTION_TEMPLATE: &str = include_str!("instruction_template.txt");

pub fn build_prompt(user_prompt: &str) -> String {
    let mut prompt = String::with_capacity(INSTRUCTION_TEMPLATE.len() + user_prompt.len());
    prompt.push_str(INSTRUCTION_TEMPLATE);
    prompt.push_str(user_prompt);
    prompt
}
