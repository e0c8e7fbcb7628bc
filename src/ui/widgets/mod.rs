pub mod line_prompt;
pub mod pager;
pub mod spinner;
pub mod tree_prompt;
