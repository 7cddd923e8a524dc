use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};

use bikeshare_explorer::config::City;
use bikeshare_explorer::data::model::{Column, TIMESTAMP_FORMAT};

const TRIPS_PER_CITY: usize = 2_000;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n.max(1)
    }

    /// Pick from `items`, earlier entries more likely (rough Zipf shape).
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let u = self.next_f64();
        let idx = ((u * u) * items.len() as f64) as usize;
        items[idx.min(items.len() - 1)]
    }
}

fn stations(city: City) -> &'static [&'static str] {
    match city {
        City::Chicago => &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Michigan Ave & Oak St",
            "Theater on the Lake",
            "Wood St & Hubbard St",
        ],
        City::NewYorkCity => &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "Broadway & E 22 St",
            "8 Ave & W 31 St",
        ],
        City::Washington => &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "14th & V St NW",
        ],
    }
}

fn has_demographics(city: City) -> bool {
    !matches!(city, City::Washington)
}

/// Random start time between 2017-01-01 and 2017-06-30, weighted towards
/// commuting hours.
fn start_time(rng: &mut SimpleRng, base: NaiveDateTime) -> NaiveDateTime {
    const BUSY_HOURS: [i64; 6] = [8, 8, 17, 17, 12, 18];
    let day = rng.below(181) as i64;
    let hour = if rng.next_f64() < 0.6 {
        BUSY_HOURS[rng.below(BUSY_HOURS.len() as u64) as usize]
    } else {
        rng.below(24) as i64
    };
    let second = rng.below(3600) as i64;
    base + Duration::days(day) + Duration::hours(hour) + Duration::seconds(second)
}

fn write_city(dir: &Path, city: City, rng: &mut SimpleRng) -> Result<PathBuf> {
    let path = city.data_path(dir);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let columns: Vec<Column> = Column::ALL
        .into_iter()
        .filter(|c| has_demographics(city) || !matches!(c, Column::Gender | Column::BirthYear))
        .collect();
    writer.write_record(columns.iter().map(|c| c.header()))?;

    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("base date")?;
    let names = stations(city);

    for row in 0..TRIPS_PER_CITY {
        let start = start_time(rng, base);
        let seconds = 60 + rng.below(2400) as i64;
        let end = start + Duration::seconds(seconds);
        let user_type = match rng.below(20) {
            0 => "",
            1..=4 => "Customer",
            _ => "Subscriber",
        };

        let mut record = vec![
            (row * 7 + 13).to_string(),
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string(),
            seconds.to_string(),
            rng.pick(names).to_owned(),
            rng.pick(names).to_owned(),
            user_type.to_owned(),
        ];
        if has_demographics(city) {
            let missing = rng.below(10) == 0;
            let gender = if missing {
                ""
            } else if rng.below(4) == 0 {
                "Female"
            } else {
                "Male"
            };
            let birth_year = if missing {
                String::new()
            } else {
                format!("{}.0", 1945 + rng.below(56))
            };
            record.push(gender.to_owned());
            record.push(birth_year);
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(path)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = SimpleRng::new(42);

    for city in City::ALL {
        let path = write_city(&dir, city, &mut rng)?;
        println!("Wrote {TRIPS_PER_CITY} trips for {city} to {}", path.display());
    }
    Ok(())
}
