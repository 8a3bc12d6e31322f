use tracing_subscriber::EnvFilter;

use mawaqit::{
    compute_prayer_times, format_time, qibla_bearing, recommend_method, City, CitySource,
    PrayerSettings,
};

fn main() -> mawaqit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let city = City::new(25.2048, 55.2708)
        .with_name("Dubai")
        .with_timezone("Asia/Dubai")
        .with_source(CitySource::Manual);
    let tz = city.timezone.as_deref().unwrap_or("UTC");

    let settings = PrayerSettings {
        method: recommend_method(Some("United Arab Emirates"), Some(city.coordinates)),
        ..PrayerSettings::default()
    };

    let result = compute_prayer_times(&city, &settings, None)?;

    println!("=== Prayer Times ===");
    println!(
        "Location: Dubai ({:.4}°N, {:.4}°E)",
        city.coordinates.latitude, city.coordinates.longitude
    );
    println!("Date: {}", result.date);
    println!("Method: {}", settings.method);
    println!();
    for (prayer, at) in result.times.iter() {
        println!(
            "{:<8} {:>9}   {}",
            prayer.name(),
            format_time(at, tz, None)?,
            format_time(at, tz, Some("ar"))?
        );
    }
    println!();
    let minutes = result.time_to_next_ms / 60_000;
    println!(
        "Next: {} at {} (in {}h {:02}m)",
        result.next_prayer,
        format_time(result.next_prayer_time, tz, None)?,
        minutes / 60,
        minutes % 60
    );
    println!("Qibla: {:.1}° from true north", qibla_bearing(city.coordinates));
    Ok(())
}
