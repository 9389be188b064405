#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Search,
    IndexStats,
    QuizStart,
    PrefGet,
    PrefSet,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "search" => Command::Search,
            "index.stats" => Command::IndexStats,
            "quiz.start" => Command::QuizStart,
            "pref.get" => Command::PrefGet,
            "pref.set" => Command::PrefSet,
            _ => Command::Unknown,
        }
    }
}
