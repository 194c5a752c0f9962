use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::Encoding;

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1) | 1,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

/// One generated file: its name, encoding, header and rows.
struct SampleFile {
    name: &'static str,
    encoding: &'static Encoding,
    bom: bool,
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

const WORDS: [&str; 12] = [
    "Midnight", "River", "Golden", "Echo", "Summer", "Heart", "Falling", "Neon", "Silent",
    "Fire", "Blue", "Road",
];

fn english_catalogue(rng: &mut SimpleRng) -> SampleFile {
    let artists = ["Alice Cooper", "Bob Dylan", "The Kinks", "Aretha Franklin", "Nina Simone"];
    let genres = ["pop", "rock", "blues", "jazz", "country", "hip hop", "reggae"];

    let rows = (0..400)
        .map(|_| {
            vec![
                format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS)),
                rng.pick(&artists).to_string(),
                rng.pick(&genres).to_string(),
                rng.range(1950, 2019).to_string(),
                rng.range(20, 400).to_string(),
            ]
        })
        .collect();

    SampleFile {
        name: "tcc_ceds_music.csv",
        encoding: encoding_rs::UTF_8,
        bom: false,
        header: vec!["track_name", "artist_name", "genre", "release_date", "len"],
        rows,
    }
}

fn hindi_catalogue(rng: &mut SimpleRng) -> SampleFile {
    let titles = ["तुम ही हो", "कल हो ना हो", "चन्ना मेरेया", "Kesariya", "Tum Hi Ho"];
    let artists = ["Arijit Singh", "Shreya Ghoshal", "Sonu Nigam", "लता मंगेशकर"];

    // No genre column, so these rows never match a genre filter.
    let rows = (0..120)
        .map(|_| {
            let year = rng.range(1970, 2023);
            vec![
                rng.pick(&titles).to_string(),
                rng.pick(&artists).to_string(),
                // Some rows carry no year.
                if year % 9 == 0 { String::new() } else { year.to_string() },
            ]
        })
        .collect();

    SampleFile {
        name: "Hindi_songs.csv",
        encoding: encoding_rs::UTF_8,
        bom: true,
        header: vec!["track_name", "artist_name", "release_date"],
        rows,
    }
}

fn latin_catalogue(rng: &mut SimpleRng) -> SampleFile {
    let titles = ["Café del Mar", "Señorita", "Déjà Vu", "Niño", "Corazón"];
    let artists = ["Beyoncé", "Rosalía", "Héroes del Silencio", "Maná"];
    let genres = ["Pop", "Flamenco", "Rock en español", "Électronique"];

    let rows = (0..80)
        .map(|_| {
            vec![
                rng.pick(&titles).to_string(),
                rng.pick(&artists).to_string(),
                rng.pick(&genres).to_string(),
                format!("{:.3}", rng.range(0, 1000) as f64 / 1000.0),
            ]
        })
        .collect();

    SampleFile {
        name: "Latin_songs.csv",
        encoding: encoding_rs::WINDOWS_1252,
        bom: false,
        header: vec!["track_name", "artist_name", "genre", "danceability"],
        rows,
    }
}

fn write_sample(dir: &Path, sample: &SampleFile) -> Result<PathBuf> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&sample.header)?;
    for row in &sample.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV buffer")?;
    let text = String::from_utf8(bytes).context("CSV output is not UTF-8")?;

    let (encoded, _, unmappable) = sample.encoding.encode(&text);
    anyhow::ensure!(
        !unmappable,
        "{} contains characters not representable in {}",
        sample.name,
        sample.encoding.name()
    );

    let mut out = Vec::with_capacity(encoded.len() + 3);
    if sample.bom {
        out.extend_from_slice(b"\xEF\xBB\xBF");
    }
    out.extend_from_slice(&encoded);

    let path = dir.join(sample.name);
    fs::write(&path, out).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let dir = PathBuf::from("sample_data");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let samples = [
        english_catalogue(&mut rng),
        hindi_catalogue(&mut rng),
        latin_catalogue(&mut rng),
    ];

    let mut paths = Vec::new();
    for sample in &samples {
        let path = write_sample(&dir, sample)?;
        println!(
            "Wrote {} rows ({}) to {}",
            sample.rows.len(),
            sample.encoding.name(),
            path.display()
        );
        paths.push(path);
    }

    let cwd = std::env::current_dir().context("reading current directory")?;
    println!("\nAdd to config.toml:\n\ndatasets = [");
    for path in paths {
        println!("    {:?},", cwd.join(path).display().to_string());
    }
    println!("]");
    Ok(())
}
