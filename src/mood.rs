use crate::config::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MoodStyle {
    pub emoji: &'static str,
    pub gradient: Gradient,
}

const fn style(emoji: &'static str, from: &'static str, to: &'static str) -> MoodStyle {
    MoodStyle {
        emoji,
        gradient: Gradient { from, to },
    }
}

pub struct MoodTable {
    entries: &'static [(&'static str, MoodStyle)],
    fallback: MoodStyle,
}

impl MoodTable {
    pub fn lookup(&self, mood: &str) -> MoodStyle {
        let key = mood.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(label, _)| *label == key)
            .map(|(_, style)| *style)
            .unwrap_or(self.fallback)
    }
}

pub static EMOTIONS: MoodTable = MoodTable {
    entries: &[
        ("happy", style("😄", "#fde047", "#f59e0b")),
        ("sad", style("😢", "#93c5fd", "#2563eb")),
        ("angry", style("😠", "#fca5a5", "#dc2626")),
        ("fear", style("😨", "#c4b5fd", "#7c3aed")),
        ("surprise", style("😲", "#fdba74", "#ea580c")),
        ("love", style("😍", "#f9a8d4", "#db2777")),
        ("neutral", style("😐", "#e5e7eb", "#6b7280")),
    ],
    fallback: style("🤔", "#cbd5e1", "#475569"),
};

pub static POLARITY: MoodTable = MoodTable {
    entries: &[
        ("positive", style("😄", "#6ee7b7", "#059669")),
        ("mildly positive", style("🙂", "#bef264", "#65a30d")),
        ("neutral", style("😐", "#e5e7eb", "#6b7280")),
        ("mildly negative", style("🙁", "#fcd34d", "#d97706")),
        ("negative", style("😞", "#fda4af", "#e11d48")),
    ],
    fallback: style("😄", "#e0e7ff", "#6366f1"),
};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: &'static str,
    pub tagline: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub background: Gradient,
    pub accent: &'static str,
    pub ink: &'static str,
    pub card: &'static str,
}

impl Variant {
    pub fn moods(self) -> &'static MoodTable {
        match self {
            Variant::Live | Variant::Demo => &EMOTIONS,
            Variant::Premium => &POLARITY,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Variant::Live => Theme {
                title: "Moodify",
                tagline: "Tell us how your day is going and we'll read the mood.",
                placeholder: "Type how you feel...",
                submit_label: "Analyze mood",
                background: Gradient { from: "#fdf2f8", to: "#e0e7ff" },
                accent: "#8b5cf6",
                ink: "#1f2937",
                card: "rgba(255, 255, 255, 0.88)",
            },
            Variant::Demo => Theme {
                title: "Moodify Demo",
                tagline: "A demo with simulated predictions. Nothing leaves this server.",
                placeholder: "Try \"I feel great today\"...",
                submit_label: "Try it",
                background: Gradient { from: "#ecfeff", to: "#fef9c3" },
                accent: "#0891b2",
                ink: "#164e63",
                card: "rgba(255, 255, 255, 0.9)",
            },
            Variant::Premium => Theme {
                title: "Moodify Premium",
                tagline: "Sentiment insight with confidence you can see.",
                placeholder: "Share your thoughts...",
                submit_label: "Reveal sentiment",
                background: Gradient { from: "#0f172a", to: "#312e81" },
                accent: "#f5c542",
                ink: "#f8fafc",
                card: "rgba(30, 27, 75, 0.82)",
            },
        }
    }
}
