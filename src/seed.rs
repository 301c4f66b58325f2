use anyhow::Result;
use tracing::info;

use crate::db::Database;
use crate::models::Lesson;

/// Populate an empty lessons collection so a fresh database serves a
/// usable catalogue. Does nothing once any lesson exists.
pub async fn seed_lessons(db: &Database) -> Result<()> {
    let existing = db.count_lessons().await?;
    if existing > 0 {
        info!("Lesson catalogue already present ({} lessons)", existing);
        return Ok(());
    }

    let lessons = default_lessons();
    db.insert_lessons(&lessons).await?;
    info!("Seeded {} lessons into empty catalogue", lessons.len());

    Ok(())
}

fn default_lessons() -> Vec<Lesson> {
    let catalogue = [
        (1, "Math", "Hendon", 100.0, "math.png"),
        (2, "English", "Colindale", 80.0, "english.png"),
        (3, "Science", "Brent Cross", 90.0, "science.png"),
        (4, "Music", "Golders Green", 120.0, "music.png"),
        (5, "Art", "Hendon", 70.0, "art.png"),
        (6, "Drama", "Kingsbury", 95.0, "drama.png"),
        (7, "Programming", "Colindale", 150.0, "programming.png"),
        (8, "French", "Brent Cross", 85.0, "french.png"),
        (9, "History", "Golders Green", 75.0, "history.png"),
        (10, "Chess", "Hendon", 60.0, "chess.png"),
    ];

    catalogue
        .into_iter()
        .map(|(id, subject, location, price, image)| Lesson {
            id,
            subject: subject.to_string(),
            location: location.to_string(),
            price,
            spaces: 5,
            image: image.to_string(),
        })
        .collect()
}
