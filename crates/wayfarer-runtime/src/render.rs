//! Result rendering
//!
//! The session hands the renderer one [`Card`] per matching record and gets
//! back one [`ClockDisplay`] per card, which it subscribes to the refresher.
//! [`TextRenderer`] is the plain-text implementation used by the terminal
//! demo.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use wayfarer_core::Record;
use wayfarer_time::{ClockDisplay, TimeSnapshot};

pub const NO_RESULTS_HEADING: &str = "No recommendations found";
pub const NO_RESULTS_HINT: &str =
    "Try searching with different keywords or browse our featured destinations.";

/// A record paired with its country's clock at render time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub record: Record,
    pub snapshot: TimeSnapshot,
}

/// Rendering collaborator
pub trait ResultRenderer: Send + Sync {
    /// Render `cards` in order, replacing earlier output, and return one
    /// clock display per card
    fn render(&self, cards: &[Card]) -> Vec<Arc<dyn ClockDisplay>>;

    /// Remove rendered results
    fn clear(&self);
}

/// "Found N recommendation(s)" or the empty-result heading
pub fn results_heading(count: usize) -> String {
    if count == 0 {
        NO_RESULTS_HEADING.to_string()
    } else {
        format!("Found {count} recommendation(s)")
    }
}

/// `{time} ({date})`
pub fn clock_line(snapshot: &TimeSnapshot) -> String {
    format!("{} ({})", snapshot.time, snapshot.date)
}

/// Live clock text for one rendered card
#[derive(Debug)]
pub struct CardClock {
    country: String,
    zone: Mutex<String>,
    line: Mutex<String>,
    updates: AtomicU64,
}

impl CardClock {
    pub fn new(country: impl Into<String>, snapshot: &TimeSnapshot) -> Self {
        CardClock {
            country: country.into(),
            zone: Mutex::new(snapshot.zone.clone()),
            line: Mutex::new(clock_line(snapshot)),
            updates: AtomicU64::new(0),
        }
    }

    /// Latest `{time} ({date})` text
    pub fn line(&self) -> String {
        self.line.lock().clone()
    }

    pub fn zone(&self) -> String {
        self.zone.lock().clone()
    }

    /// Updates received since the card was rendered
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

impl ClockDisplay for CardClock {
    fn country(&self) -> &str {
        &self.country
    }

    fn show(&self, snapshot: &TimeSnapshot) {
        *self.line.lock() = clock_line(snapshot);
        *self.zone.lock() = snapshot.zone.clone();
        self.updates.fetch_add(1, Ordering::Relaxed);
    }
}

/// Writes cards as plain text and keeps their live clocks
pub struct TextRenderer<W> {
    out: Mutex<W>,
    clocks: Mutex<Vec<Arc<CardClock>>>,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer {
            out: Mutex::new(out),
            clocks: Mutex::new(Vec::new()),
        }
    }

    /// Clocks of the cards currently shown, in render order
    pub fn clocks(&self) -> Vec<Arc<CardClock>> {
        self.clocks.lock().clone()
    }

    /// Access the underlying writer
    pub fn writer(&self) -> MutexGuard<'_, W> {
        self.out.lock()
    }

    fn write_cards(&self, cards: &[Card]) -> std::io::Result<()> {
        let mut out = self.out.lock();

        writeln!(out)?;
        writeln!(out, "{}", results_heading(cards.len()))?;
        if cards.is_empty() {
            writeln!(out, "{NO_RESULTS_HINT}")?;
        }

        for card in cards {
            let record = &card.record;
            writeln!(out)?;
            writeln!(out, "  {}", record.name)?;
            writeln!(out, "  {}", record.country)?;
            writeln!(out, "  {}", record.description)?;
            writeln!(out, "  [{}]  {}", record.category, record.price_range)?;
            writeln!(out, "  Best Time: {}", record.best_time)?;
            if !record.image_url.is_empty() {
                writeln!(out, "  Image: {}", record.image_url)?;
            }
            writeln!(out, "  Current Time in {}: {}", record.country, clock_line(&card.snapshot))?;
            writeln!(out, "  Timezone: {}", card.snapshot.zone)?;
        }

        out.flush()
    }
}

impl<W: Write + Send> ResultRenderer for TextRenderer<W> {
    fn render(&self, cards: &[Card]) -> Vec<Arc<dyn ClockDisplay>> {
        if let Err(err) = self.write_cards(cards) {
            tracing::warn!(error = %err, "failed to write results");
        }

        let clocks: Vec<Arc<CardClock>> = cards
            .iter()
            .map(|card| Arc::new(CardClock::new(card.record.country.clone(), &card.snapshot)))
            .collect();
        *self.clocks.lock() = clocks.clone();

        clocks
            .into_iter()
            .map(|clock| clock as Arc<dyn ClockDisplay>)
            .collect()
    }

    fn clear(&self) {
        self.clocks.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, country: &str) -> Card {
        Card {
            record: Record {
                name: name.to_string(),
                country: country.to_string(),
                category: "Beach".to_string(),
                description: "Sand and sun".to_string(),
                image_url: String::new(),
                price_range: "$$".to_string(),
                best_time: "May".to_string(),
            },
            snapshot: TimeSnapshot {
                time: "Sun, Oct 18, 3:04:05 PM".to_string(),
                date: "Sun, Oct 18".to_string(),
                zone: "Asia/Tokyo".to_string(),
            },
        }
    }

    fn output(renderer: &TextRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.writer().clone()).unwrap()
    }

    #[test]
    fn test_heading() {
        assert_eq!(results_heading(0), "No recommendations found");
        assert_eq!(results_heading(1), "Found 1 recommendation(s)");
        assert_eq!(results_heading(3), "Found 3 recommendation(s)");
    }

    #[test]
    fn test_render_cards() {
        let renderer = TextRenderer::new(Vec::new());
        let displays = renderer.render(&[card("Okinawa", "Japan"), card("Miyako", "Japan")]);

        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].country(), "Japan");

        let text = output(&renderer);
        assert!(text.contains("Found 2 recommendation(s)"));
        assert!(text.contains("Current Time in Japan: Sun, Oct 18, 3:04:05 PM (Sun, Oct 18)"));
        assert!(text.contains("Timezone: Asia/Tokyo"));
        assert!(text.find("Okinawa").unwrap() < text.find("Miyako").unwrap());
    }

    #[test]
    fn test_render_empty() {
        let renderer = TextRenderer::new(Vec::new());
        assert!(renderer.render(&[]).is_empty());

        let text = output(&renderer);
        assert!(text.contains(NO_RESULTS_HEADING));
        assert!(text.contains(NO_RESULTS_HINT));
    }

    #[test]
    fn test_clock_updates_through_display() {
        let renderer = TextRenderer::new(Vec::new());
        let displays = renderer.render(&[card("Okinawa", "Japan")]);
        assert_eq!(renderer.clocks()[0].updates(), 0);

        displays[0].show(&TimeSnapshot {
            time: "Sun, Oct 18, 3:04:06 PM".to_string(),
            date: "Sun, Oct 18".to_string(),
            zone: "Asia/Tokyo".to_string(),
        });
        assert_eq!(renderer.clocks()[0].line(), "Sun, Oct 18, 3:04:06 PM (Sun, Oct 18)");
        assert_eq!(renderer.clocks()[0].updates(), 1);

        renderer.clear();
        assert!(renderer.clocks().is_empty());
    }
}
