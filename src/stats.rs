use crate::config::Goals;
use crate::models::{
    ChartData, DashboardView, Dataset, Dated, Exercise, GoalProgress, MacroTotals, Meal,
    NutritionView, ProgressEntry, ProgressView, SeriesStyle, WorkoutView,
};
use chrono::{Local, NaiveDate};

/// Estimated minutes spent per logged set.
pub const MINUTES_PER_SET: f64 = 2.0;

pub const HISTORY_LABELS: [&str; 7] = [
    "6d ago",
    "5d ago",
    "4d ago",
    "3d ago",
    "2d ago",
    "Yesterday",
    "Today",
];

// Placeholder history for the six days before today. There is no stored
// daily rollup, only today's flat meal list.
pub const CALORIES_BACKFILL: [f64; 6] = [1800.0, 2000.0, 1750.0, 2100.0, 1900.0, 1850.0];
pub const PROTEIN_BACKFILL: [f64; 6] = [90.0, 110.0, 100.0, 120.0, 105.0, 95.0];
pub const CARBS_BACKFILL: [f64; 6] = [200.0, 220.0, 210.0, 230.0, 215.0, 205.0];
pub const FAT_BACKFILL: [f64; 6] = [50.0, 60.0, 55.0, 65.0, 58.0, 52.0];

pub fn sum_field<'a, R: 'a>(
    records: impl IntoIterator<Item = &'a R>,
    field: impl Fn(&R) -> f64,
) -> f64 {
    records.into_iter().map(field).sum()
}

pub fn filter_by_calendar_day<R: Dated>(records: &[R], day: NaiveDate) -> Vec<&R> {
    filter_by_calendar_day_at(records, day, Local::now().date_naive())
}

/// Records dated `day`. Only the date portion of a timestamp is compared;
/// undated records count as `today`.
pub fn filter_by_calendar_day_at<R: Dated>(
    records: &[R],
    day: NaiveDate,
    today: NaiveDate,
) -> Vec<&R> {
    let wanted = date_key(day);
    let fallback = date_key(today);
    records
        .iter()
        .filter(|record| {
            let date = record.date().map(date_portion).unwrap_or(fallback.as_str());
            date == wanted
        })
        .collect()
}

/// Not clamped: a total above its goal yields more than 100.
pub fn percent_of_goal(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    total * 100.0 / goal
}

/// The backfilled history followed by one live point summed from `records`.
pub fn series_from_history<'a, R: 'a>(
    backfill: &[f64],
    records: impl IntoIterator<Item = &'a R>,
    field: impl Fn(&R) -> f64,
) -> Vec<f64> {
    let mut series = backfill.to_vec();
    series.push(sum_field(records, field));
    series
}

pub fn workout_minutes(exercises: &[Exercise]) -> f64 {
    workout_minutes_at(exercises, Local::now().date_naive())
}

pub fn workout_minutes_at(exercises: &[Exercise], today: NaiveDate) -> f64 {
    let todays = filter_by_calendar_day_at(exercises, today, today);
    MINUTES_PER_SET * sum_field(todays, |exercise| exercise.sets as f64)
}

pub fn build_workout_view(exercises: &[Exercise]) -> WorkoutView {
    build_workout_view_at(exercises, Local::now().date_naive())
}

pub fn build_workout_view_at(exercises: &[Exercise], today: NaiveDate) -> WorkoutView {
    let todays = filter_by_calendar_day_at(exercises, today, today);
    WorkoutView {
        exercises: exercises.to_vec(),
        total_sets: sum_field(todays.iter().copied(), |exercise| exercise.sets as f64),
        minutes: workout_minutes_at(exercises, today),
        volume: sum_field(todays, |exercise| {
            exercise.sets as f64 * exercise.reps as f64 * exercise.weight
        }),
    }
}

pub fn macro_totals(meals: &[&Meal]) -> MacroTotals {
    MacroTotals {
        calories: sum_field(meals.iter().copied(), |meal| meal.calories as f64),
        protein: sum_field(meals.iter().copied(), |meal| meal.protein as f64),
        carbs: sum_field(meals.iter().copied(), |meal| meal.carbs as f64),
        fat: sum_field(meals.iter().copied(), |meal| meal.fat as f64),
        water: sum_field(meals.iter().copied(), |meal| meal.water.unwrap_or(0.0)),
    }
}

pub fn build_nutrition_view(meals: &[Meal], goals: &Goals) -> NutritionView {
    build_nutrition_view_at(meals, goals, Local::now().date_naive())
}

pub fn build_nutrition_view_at(meals: &[Meal], goals: &Goals, today: NaiveDate) -> NutritionView {
    let todays = filter_by_calendar_day_at(meals, today, today);
    let totals = macro_totals(&todays);
    let labels: Vec<String> = HISTORY_LABELS.iter().map(|label| label.to_string()).collect();

    let calories_chart = ChartData {
        labels: labels.clone(),
        datasets: vec![Dataset {
            label: "Calories".to_string(),
            values: series_from_history(&CALORIES_BACKFILL, todays.iter().copied(), |meal| {
                meal.calories as f64
            }),
            style: style("rgb(255, 99, 132)", Some("rgba(255, 99, 132, 0.2)"), 0.2, None),
        }],
    };

    let macros_chart = ChartData {
        labels,
        datasets: vec![
            Dataset {
                label: "Protein (g)".to_string(),
                values: series_from_history(&PROTEIN_BACKFILL, todays.iter().copied(), |meal| {
                    meal.protein as f64
                }),
                style: style("rgb(54, 162, 235)", Some("rgba(54, 162, 235, 0.2)"), 0.2, None),
            },
            Dataset {
                label: "Carbs (g)".to_string(),
                values: series_from_history(&CARBS_BACKFILL, todays.iter().copied(), |meal| {
                    meal.carbs as f64
                }),
                style: style("rgb(255, 206, 86)", Some("rgba(255, 206, 86, 0.2)"), 0.2, None),
            },
            Dataset {
                label: "Fat (g)".to_string(),
                values: series_from_history(&FAT_BACKFILL, todays.iter().copied(), |meal| {
                    meal.fat as f64
                }),
                style: style("rgb(75, 192, 192)", Some("rgba(75, 192, 192, 0.2)"), 0.2, None),
            },
        ],
    };

    NutritionView {
        meals: meals.to_vec(),
        goals: vec![
            goal_progress("Calories", "kcal", totals.calories, goals.calories),
            goal_progress("Protein", "g", totals.protein, goals.protein),
            goal_progress("Carbs", "g", totals.carbs, goals.carbs),
            goal_progress("Fat", "g", totals.fat, goals.fat),
        ],
        totals,
        calories_chart,
        macros_chart,
    }
}

pub fn build_progress_view(entries: &[ProgressEntry]) -> ProgressView {
    let first = entries.first();
    let latest = entries.last();
    let (weight_change, body_fat_change) = match (first, latest) {
        (Some(first), Some(latest)) => (
            latest.weight - first.weight,
            latest.body_fat - first.body_fat,
        ),
        _ => (0.0, 0.0),
    };

    ProgressView {
        entries: entries.to_vec(),
        latest: latest.cloned(),
        weight_change,
        body_fat_change,
        chart: ChartData {
            labels: entries.iter().map(|entry| entry.date.clone()).collect(),
            datasets: vec![
                Dataset {
                    label: "Weight (kg)".to_string(),
                    values: entries.iter().map(|entry| entry.weight).collect(),
                    style: style("rgb(75, 192, 192)", None, 0.1, Some("y")),
                },
                Dataset {
                    label: "Body Fat %".to_string(),
                    values: entries.iter().map(|entry| entry.body_fat).collect(),
                    style: style("rgb(255, 99, 132)", None, 0.1, Some("y1")),
                },
            ],
        },
    }
}

pub fn build_dashboard(
    exercises: &[Exercise],
    meals: &[Meal],
    entries: &[ProgressEntry],
    goals: &Goals,
) -> DashboardView {
    build_dashboard_at(exercises, meals, entries, goals, Local::now().date_naive())
}

pub fn build_dashboard_at(
    exercises: &[Exercise],
    meals: &[Meal],
    entries: &[ProgressEntry],
    goals: &Goals,
    today: NaiveDate,
) -> DashboardView {
    let todays_meals = filter_by_calendar_day_at(meals, today, today);
    let totals = macro_totals(&todays_meals);

    DashboardView {
        date: date_key(today),
        workout_minutes: workout_minutes_at(exercises, today),
        exercise_count: filter_by_calendar_day_at(exercises, today, today).len(),
        calories: goal_progress("Daily Calories", "kcal", totals.calories, goals.calories),
        water: goal_progress("Water Intake", "L", totals.water, goals.water_litres),
        weight_chart: ChartData {
            labels: entries.iter().map(|entry| entry.date.clone()).collect(),
            datasets: vec![Dataset {
                label: "Weight (kg)".to_string(),
                values: entries.iter().map(|entry| entry.weight).collect(),
                style: style("rgb(75, 192, 192)", None, 0.1, None),
            }],
        },
    }
}

fn goal_progress(label: &str, unit: &str, total: f64, goal: f64) -> GoalProgress {
    GoalProgress {
        label: label.to_string(),
        unit: unit.to_string(),
        total,
        goal,
        percent: percent_of_goal(total, goal),
    }
}

fn style(border: &str, background: Option<&str>, tension: f64, axis: Option<&str>) -> SeriesStyle {
    SeriesStyle {
        border_color: border.to_string(),
        background_color: background.map(str::to_string),
        tension,
        y_axis_id: axis.map(str::to_string),
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn date_portion(date: &str) -> &str {
    date.split(['T', ' ']).next().unwrap_or(date)
}
