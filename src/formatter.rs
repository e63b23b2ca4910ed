//! Custom tracing formatter that stamps each line with the simulated clock

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Frame counter of the most recently ticked game
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Simulated seconds of the most recently ticked game, stored as `f64` bits
static SIM_TIME_BITS: AtomicU64 = AtomicU64::new(0);

/// Frame counter is shown as 16-bit hex
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// A formatter that prints the wall-clock time, the simulated clock and the frame counter
/// before the usual level, span scope, target and fields.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|e| {
            eprintln!("Failed to format timestamp: {}", e);
            fmt::Error
        })?;
        write_dimmed(&mut writer, formatted_time)?;
        writer.write_char(' ')?;

        write_dimmed(
            &mut writer,
            format_args!("{:>8.2}s 0x{:04X}", sim_time(), frame_count() & FRAME_DISPLAY_MASK),
        )?;
        writer.write_char(' ')?;

        write_colored_level(&mut writer, meta.level())?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut saw_any = false;
            for span in scope.from_root() {
                write_bold(&mut writer, span.metadata().name())?;
                saw_any = true;
                let ext = span.extensions();
                if let Some(fields) = &ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write_bold(&mut writer, "{")?;
                        write!(writer, "{}", fields)?;
                        write_bold(&mut writer, "}")?;
                    }
                }
                write_dimmed(&mut writer, ':')?;
            }
            if saw_any {
                writer.write_char(' ')?;
            }
        }

        write_dimmed(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Level name padded to five columns, with its color code.
fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("TRACE", "\x1b[35m"),
        Level::DEBUG => ("DEBUG", "\x1b[34m"),
        Level::INFO => (" INFO", "\x1b[32m"),
        Level::WARN => (" WARN", "\x1b[33m"),
        Level::ERROR => ("ERROR", "\x1b[31m"),
    }
}

fn write_colored_level(writer: &mut Writer<'_>, level: &Level) -> fmt::Result {
    let (text, color) = level_style(level);
    write_styled(writer, color, text)
}

fn write_dimmed(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    write_styled(writer, DIM, s)
}

fn write_bold(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    write_styled(writer, BOLD, s)
}

/// Writes `s` wrapped in `style`, or plain when the writer has no ANSI support.
fn write_styled(writer: &mut Writer<'_>, style: &str, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{style}{s}{RESET}")
    } else {
        write!(writer, "{s}")
    }
}

/// Record the clock of the frame that just ran.
///
/// Called by `Game::tick` after each frame.
pub fn record_frame(frame: u64, sim_seconds: f64) {
    FRAME_COUNTER.store(frame, Ordering::Relaxed);
    SIM_TIME_BITS.store(sim_seconds.to_bits(), Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}

pub fn sim_time() -> f64 {
    f64::from_bits(SIM_TIME_BITS.load(Ordering::Relaxed))
}
