use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single questionnaire item. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
}

impl Question {
    pub fn new(id: &str, text: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            category,
            subcategory: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategory = Some(subcategory);
        self
    }
}

/// Domain grouping declared by the catalog for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Inattention,
    Hyperactivity,
    Impulsivity,
    Childhood,
    Impairment,
    Activation,
    Focus,
    Effort,
    Emotion,
    Memory,
    Action,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Inattention => "Inattention",
            Category::Hyperactivity => "Hyperactivity",
            Category::Impulsivity => "Impulsivity",
            Category::Childhood => "Childhood (before age 12)",
            Category::Impairment => "Functional impairment",
            Category::Activation => "Activation (organising, getting started)",
            Category::Focus => "Attention / Focus",
            Category::Effort => "Effort / Energy",
            Category::Emotion => "Emotional regulation",
            Category::Memory => "Working memory",
            Category::Action => "Inhibition / Action",
        }
    }
}

/// Finer grouping: the ASRS part, or the life domain of an impairment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subcategory {
    PartA,
    PartB,
    Work,
    Family,
    Social,
    Leisure,
    SelfEsteem,
}

impl Subcategory {
    pub fn label(&self) -> &'static str {
        match self {
            Subcategory::PartA => "Part A",
            Subcategory::PartB => "Part B",
            Subcategory::Work => "Work",
            Subcategory::Family => "Family",
            Subcategory::Social => "Social",
            Subcategory::Leisure => "Leisure",
            Subcategory::SelfEsteem => "Self-esteem",
        }
    }
}

/// The integer response scale a questionnaire is answered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseScale {
    /// Never (0) to Very often (4).
    Frequency,
    /// No (0) / Yes (1).
    YesNo,
    /// Not a problem (0) to Often a problem (3).
    ProblemSeverity,
}

impl ResponseScale {
    pub fn min(&self) -> u32 {
        0
    }

    pub fn max(&self) -> u32 {
        match self {
            ResponseScale::Frequency => 4,
            ResponseScale::YesNo => 1,
            ResponseScale::ProblemSeverity => 3,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Option labels, indexed by response level.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ResponseScale::Frequency => &["Never", "Rarely", "Sometimes", "Often", "Very often"],
            ResponseScale::YesNo => &["No", "Yes"],
            ResponseScale::ProblemSeverity => &[
                "Not a problem",
                "Rarely a problem",
                "Sometimes a problem",
                "Often a problem",
            ],
        }
    }

    pub fn option_label(&self, value: u32) -> Option<&'static str> {
        self.options().get(value as usize).copied()
    }
}
