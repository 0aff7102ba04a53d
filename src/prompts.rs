pub const SYSTEM: &str = include_str!("../data/prompts/system.txt");
