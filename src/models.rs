use serde::{Deserialize, Serialize};

/// One logged exercise in today's workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Exercise {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Meal {
    pub name: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    /// Litres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A body-measurement checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressEntry {
    pub date: String,
    pub weight: f64,
    #[serde(rename = "bodyFat")]
    pub body_fat: f64,
    #[serde(default)]
    pub notes: String,
}

/// Records that may carry a calendar date. `None` means "today".
pub trait Dated {
    fn date(&self) -> Option<&str>;
}

impl Dated for Exercise {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Dated for Meal {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Dated for ProgressEntry {
    fn date(&self) -> Option<&str> {
        Some(self.date.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Transient message shown after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub border_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub tension: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

/// Labeled series handed to the chart surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub label: String,
    pub unit: String,
    pub total: f64,
    pub goal: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutView {
    pub exercises: Vec<Exercise>,
    pub total_sets: f64,
    pub minutes: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionView {
    pub meals: Vec<Meal>,
    pub totals: MacroTotals,
    pub goals: Vec<GoalProgress>,
    pub calories_chart: ChartData,
    pub macros_chart: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressView {
    pub entries: Vec<ProgressEntry>,
    pub latest: Option<ProgressEntry>,
    pub weight_change: f64,
    pub body_fat_change: f64,
    pub chart: ChartData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub date: String,
    pub workout_minutes: f64,
    pub exercise_count: usize,
    pub calories: GoalProgress,
    pub water: GoalProgress,
    pub weight_chart: ChartData,
}

/// Body of a successful add: the notice plus the re-derived view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse<V> {
    pub notice: Notice,
    pub view: V,
}
