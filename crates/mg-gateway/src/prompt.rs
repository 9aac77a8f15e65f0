//! Natural-language prompt sent alongside the response schema.

use chrono::NaiveDate;
use mg_core::AssessmentRequest;

const PREAMBLE: &str = "You are MindGuard, a mental wellbeing engine. \
Analyze the user profile and provide a structured JSON response.";

const RULES: [&str; 5] = [
    "MindGuard is a supportive companion, NOT a medical professional.",
    "Respond strictly in JSON.",
    "IMPORTANT: For \"recommendations.videos\", provide 3 VALID YouTube URLs \
     (e.g., https://www.youtube.com/watch?v=...) that are relevant to the user's stress level \
     (e.g., guided meditation for High stress, upbeat science/productivity for Low stress).",
    "Generate realistic 7-day stress history data ending today.",
    "Use \"daily_checkin.date\" for today's date and echo the user's category in \"category\".",
];

/// Render the prompt for `request` as of `today`.
#[must_use]
pub fn build_prompt(request: &AssessmentRequest, today: NaiveDate) -> String {
    let onboarding = &request.onboarding;
    let daily = &request.daily_checkin;
    let rules = RULES
        .iter()
        .enumerate()
        .map(|(index, rule)| format!("{}. {rule}", index + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{PREAMBLE}\n\n\
         TODAY: {today}\n\n\
         USER PROFILE:\n\
         Category: {category}\n\
         Current Life Pressure: {life_pressure}\n\
         General Sleep Quality: {sleep_quality}\n\
         Mood: {mood}\n\
         Motivation: {motivation}\n\
         Biggest Worry: {biggest_worry}\n\
         Energy Through the Day: {energy_level}\n\
         Work-Life Balance: {work_life_balance}\n\n\
         DAILY CHECK-IN:\n\
         Daily Stress Level (1-10): {stress}\n\
         Today's Trigger: {trigger}\n\
         Sleep Last Night: {sleep_last_night}\n\
         Today in One Word: {day_word}\n\n\
         RULES:\n\
         {rules}\n",
        today = today.format("%Y-%m-%d"),
        category = request.category,
        life_pressure = onboarding.life_pressure,
        sleep_quality = onboarding.sleep_quality,
        mood = onboarding.mood,
        motivation = onboarding.motivation,
        biggest_worry = onboarding.biggest_worry,
        energy_level = onboarding.energy_level,
        work_life_balance = onboarding.work_life_balance,
        stress = daily.self_reported_stress,
        trigger = daily.mood_trigger,
        sleep_last_night = daily.sleep_last_night,
        day_word = daily.day_word,
    )
}
