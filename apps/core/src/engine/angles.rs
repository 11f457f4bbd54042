//! Content angle templates.

use super::analysis::ContentAngle;

/// Words that make a topic a myth-busting candidate
pub const MYTH_MARKERS: &[&str] = &["myth", "truth", "fact", "reality"];

/// Maximum number of angles returned
pub const MAX_ANGLES: usize = 4;

fn angle(name: &str, description: String, hook_example: String) -> ContentAngle {
    ContentAngle {
        angle: name.to_string(),
        description,
        hook_example,
    }
}

/// Suggest framings for a normalized topic.
///
/// The four default angles always come first, so the conditional
/// Myth-Busting angle is appended and then cut by the cap.
pub fn suggest_angles(topic: &str) -> Vec<ContentAngle> {
    let topic_lower = topic.to_lowercase();

    let mut angles = vec![
        angle(
            "Educational",
            format!("Explain {} in simple terms", topic),
            format!("Everything you need to know about {}", topic),
        ),
        angle(
            "Personal Experience",
            format!("Share personal insights about {}", topic),
            format!("My experience with {} (and what I learned)", topic),
        ),
        angle(
            "Future Trends",
            format!("Discuss the future implications of {}", topic),
            format!("How {} will change everything in 2024", topic),
        ),
        angle(
            "Problem-Solution",
            format!("Present {} as a solution to common problems", topic),
            format!("This {} solution will save you hours", topic),
        ),
    ];

    if MYTH_MARKERS.iter().any(|word| topic_lower.contains(word)) {
        angles.push(angle(
            "Myth-Busting",
            format!("Debunk common misconceptions about {}", topic),
            format!("The truth about {} (most people get this wrong)", topic),
        ));
    }

    angles.truncate(MAX_ANGLES);
    angles
}
