//! History storage
//!
//! One JSON blob holding everything the studio has generated: copies,
//! batches, headlines and image combos, plus the running counters the
//! dashboard reports on. Lists are newest-first and cap-bounded so the file
//! can't grow without limit.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{get_data_dir, StorageError};
use crate::types::{Batch, FunnelStage, GeneratedCopy, GeneratedHeadline, ImageCombo};

/// Retention caps. Newest entries win; anything past the cap is evicted.
const MAX_COPIES: usize = 500;
const MAX_BATCHES: usize = 100;
const MAX_HEADLINES: usize = 500;
const MAX_IMAGES: usize = 500;

/// Everything the studio remembers between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStore {
    pub copies: Vec<GeneratedCopy>,
    pub images: Vec<ImageCombo>,
    pub headlines: Vec<GeneratedHeadline>,
    pub batches: Vec<Batch>,
    /// Total items ever generated (not reduced by cap eviction)
    pub count: u64,
    /// Copies discarded for repeating an earlier script
    pub duplicates_avoided: u64,
}

/// Dashboard summary derived from the history.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_generated: u64,
    pub copies_this_week: usize,
    pub images_this_week: usize,
    pub favorite_funnel: FunnelStage,
    pub average_words: usize,
    pub duplicates_avoided: u64,
}

/// Activity counts for one day of the weekly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DayActivity {
    /// Short Spanish weekday label, e.g. "Lun"
    pub label: &'static str,
    pub copies: usize,
    pub images: usize,
}

const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

impl HistoryStore {
    /// Prepend a copy and bump the counter.
    pub fn add_copy(&mut self, copy: GeneratedCopy) {
        self.copies.insert(0, copy);
        self.copies.truncate(MAX_COPIES);
        self.count += 1;
    }

    /// Record a batch: the batch itself plus all of its copies.
    pub fn add_batch(&mut self, batch: Batch) {
        let n = batch.copies.len() as u64;
        let mut copies = batch.copies.clone();
        copies.append(&mut self.copies);
        self.copies = copies;
        self.copies.truncate(MAX_COPIES);

        self.batches.insert(0, batch);
        self.batches.truncate(MAX_BATCHES);
        self.count += n;
    }

    pub fn add_headline(&mut self, headline: GeneratedHeadline) {
        self.headlines.insert(0, headline);
        self.headlines.truncate(MAX_HEADLINES);
        self.count += 1;
    }

    pub fn add_image(&mut self, image: ImageCombo) {
        self.images.insert(0, image);
        self.images.truncate(MAX_IMAGES);
        self.count += 1;
    }

    /// Flip the favorite flag on a copy. Returns false if the id is unknown.
    pub fn toggle_favorite_copy(&mut self, id: &str) -> bool {
        match self.copies.iter_mut().find(|c| c.id == id) {
            Some(copy) => {
                copy.is_favorite = !copy.is_favorite;
                true
            }
            None => false,
        }
    }

    /// Flip the favorite flag on an image combo.
    pub fn toggle_favorite_image(&mut self, id: &str) -> bool {
        match self.images.iter_mut().find(|i| i.id == id) {
            Some(image) => {
                image.is_favorite = !image.is_favorite;
                true
            }
            None => false,
        }
    }

    pub fn increment_duplicates_avoided(&mut self) {
        self.duplicates_avoided += 1;
    }

    /// Forget everything. Earlier scripts may repeat after this.
    pub fn clear(&mut self) {
        *self = HistoryStore::default();
    }

    pub fn favorite_copies(&self) -> impl Iterator<Item = &GeneratedCopy> {
        self.copies.iter().filter(|c| c.is_favorite)
    }

    pub fn favorite_images(&self) -> impl Iterator<Item = &ImageCombo> {
        self.images.iter().filter(|i| i.is_favorite)
    }

    /// Copies whose text, persona or funnel matches the search term.
    pub fn search_copies(&self, term: &str) -> Vec<&GeneratedCopy> {
        let term = term.to_lowercase();
        self.copies
            .iter()
            .filter(|c| {
                c.full_text.to_lowercase().contains(&term)
                    || c.persona.name.to_lowercase().contains(&term)
                    || c.funnel.key().contains(&term)
            })
            .collect()
    }

    /// Summary numbers for the dashboard tiles.
    pub fn stats(&self, now: DateTime<Utc>) -> DashboardStats {
        let week_ago = now - Duration::weeks(1);

        let copies_this_week = self.copies.iter().filter(|c| c.timestamp > week_ago).count();
        let images_this_week = self.images.iter().filter(|i| i.timestamp > week_ago).count();

        let mut funnel_counts: HashMap<FunnelStage, usize> = HashMap::new();
        for copy in &self.copies {
            *funnel_counts.entry(copy.funnel).or_default() += 1;
        }
        let favorite_funnel = funnel_counts
            .into_iter()
            .max_by_key(|&(_, n)| n)
            .map(|(stage, _)| stage)
            .unwrap_or(FunnelStage::Tof);

        let average_words = if self.copies.is_empty() {
            0
        } else {
            let total: usize = self.copies.iter().map(|c| c.words).sum();
            (total as f64 / self.copies.len() as f64).round() as usize
        };

        DashboardStats {
            total_generated: self.count,
            copies_this_week,
            images_this_week,
            favorite_funnel,
            average_words,
            duplicates_avoided: self.duplicates_avoided,
        }
    }

    /// Per-day activity for the last 7 days, oldest first.
    pub fn weekly_activity(&self, now: DateTime<Utc>) -> Vec<DayActivity> {
        (0..7)
            .rev()
            .map(|back| {
                let day = (now - Duration::days(back)).date_naive();
                let copies = self
                    .copies
                    .iter()
                    .filter(|c| c.timestamp.date_naive() == day)
                    .count();
                let images = self
                    .images
                    .iter()
                    .filter(|i| i.timestamp.date_naive() == day)
                    .count();
                DayActivity {
                    label: WEEKDAY_LABELS[day.weekday().num_days_from_sunday() as usize],
                    copies,
                    images,
                }
            })
            .collect()
    }

    /// How many copies each funnel stage has, in stage order, zeros skipped.
    pub fn funnel_distribution(&self) -> Vec<(FunnelStage, usize)> {
        FunnelStage::ALL
            .iter()
            .filter_map(|&stage| {
                let n = self.copies.iter().filter(|c| c.funnel == stage).count();
                (n > 0).then_some((stage, n))
            })
            .collect()
    }
}

/// Get the history file path
fn get_history_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("history.json"))
}

/// Load the history from disk
///
/// Returns an empty store if the file doesn't exist or is corrupted
pub fn load_history() -> HistoryStore {
    match get_history_path().and_then(|p| load_from(&p)) {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!("Failed to load history, starting empty: {}", e);
            HistoryStore::default()
        }
    }
}

fn load_from(path: &Path) -> Result<HistoryStore, StorageError> {
    if !path.exists() {
        return Ok(HistoryStore::default());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save the history to disk
pub fn save_history(history: &HistoryStore) -> Result<(), StorageError> {
    let path = get_history_path()?;
    save_to(history, &path)
}

fn save_to(history: &HistoryStore, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)?;
    tracing::debug!("Saved history ({} copies)", history.copies.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persona_by_id;
    use crate::types::BatchStyle;
    use uuid::Uuid;

    fn copy(stage: FunnelStage, words: usize, age_days: i64) -> GeneratedCopy {
        let persona = persona_by_id("mama-renovadora").unwrap().clone();
        GeneratedCopy {
            id: Uuid::new_v4().to_string(),
            attention: "a".into(),
            interest: "b".into(),
            desire: "c".into(),
            action: "d".into(),
            visual_attention: None,
            visual_interest: None,
            visual_desire: None,
            visual_action: None,
            full_text: "a b c d".into(),
            words,
            time_secs: 2,
            persona,
            funnel: stage,
            timestamp: Utc::now() - Duration::days(age_days),
            is_favorite: false,
        }
    }

    #[test]
    fn test_add_copy_prepends_and_counts() {
        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Tof, 10, 0));
        let second = copy(FunnelStage::Bof, 20, 0);
        let second_id = second.id.clone();
        store.add_copy(second);

        assert_eq!(store.copies[0].id, second_id);
        assert_eq!(store.count, 2);
    }

    #[test]
    fn test_copy_cap_evicts_oldest() {
        let mut store = HistoryStore::default();
        for _ in 0..(MAX_COPIES + 10) {
            store.add_copy(copy(FunnelStage::Tof, 10, 0));
        }
        assert_eq!(store.copies.len(), MAX_COPIES);
        assert_eq!(store.count, (MAX_COPIES + 10) as u64);
    }

    #[test]
    fn test_add_batch_prepends_its_copies() {
        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Tof, 10, 0));

        let batch = Batch {
            id: Uuid::new_v4().to_string(),
            copies: vec![copy(FunnelStage::Mof, 10, 0), copy(FunnelStage::Bof, 10, 0)],
            timestamp: Utc::now(),
            count: 2,
            style: BatchStyle::Classic,
        };
        store.add_batch(batch);

        assert_eq!(store.copies.len(), 3);
        assert_eq!(store.copies[0].funnel, FunnelStage::Mof);
        assert_eq!(store.copies[2].funnel, FunnelStage::Tof);
        assert_eq!(store.batches.len(), 1);
        assert_eq!(store.count, 3);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut store = HistoryStore::default();
        let c = copy(FunnelStage::Tof, 10, 0);
        let id = c.id.clone();
        store.add_copy(c);

        assert!(store.toggle_favorite_copy(&id));
        assert_eq!(store.favorite_copies().count(), 1);
        assert!(store.toggle_favorite_copy(&id));
        assert_eq!(store.favorite_copies().count(), 0);
        assert!(!store.toggle_favorite_copy("no-such-id"));
    }

    #[test]
    fn test_search_matches_text_persona_and_funnel() {
        let mut store = HistoryStore::default();
        let mut c = copy(FunnelStage::Metralleta, 10, 0);
        c.full_text = "Placas 3D sin obra".into();
        store.add_copy(c);

        assert_eq!(store.search_copies("sin obra").len(), 1);
        assert_eq!(store.search_copies("renovadora").len(), 1);
        assert_eq!(store.search_copies("metralleta").len(), 1);
        assert_eq!(store.search_copies("zzz").len(), 0);
    }

    #[test]
    fn test_stats_week_window_and_favorite_funnel() {
        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Bof, 60, 0));
        store.add_copy(copy(FunnelStage::Bof, 80, 2));
        store.add_copy(copy(FunnelStage::Tof, 100, 30));

        let stats = store.stats(Utc::now());
        assert_eq!(stats.copies_this_week, 2);
        assert_eq!(stats.favorite_funnel, FunnelStage::Bof);
        assert_eq!(stats.average_words, 80);
        assert_eq!(stats.total_generated, 3);
    }

    #[test]
    fn test_weekly_activity_buckets_by_day() {
        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Tof, 10, 0));
        store.add_copy(copy(FunnelStage::Tof, 10, 0));
        store.add_copy(copy(FunnelStage::Tof, 10, 3));
        store.add_copy(copy(FunnelStage::Tof, 10, 20)); // outside the window

        let week = store.weekly_activity(Utc::now());
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].copies, 2);
        assert_eq!(week[3].copies, 1);
        let total: usize = week.iter().map(|d| d.copies).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_funnel_distribution_skips_empty_stages() {
        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Hibrido, 10, 0));
        store.add_copy(copy(FunnelStage::Hibrido, 10, 0));
        store.add_copy(copy(FunnelStage::Tof, 10, 0));

        let dist = store.funnel_distribution();
        assert_eq!(dist, vec![(FunnelStage::Tof, 1), (FunnelStage::Hibrido, 2)]);
    }

    #[test]
    fn test_history_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::default();
        store.add_copy(copy(FunnelStage::Mof, 42, 0));
        store.increment_duplicates_avoided();

        save_to(&store, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, HistoryStore::default());
    }
}
