//! Parallel generation of many seeded avatars
//!
//! Each avatar owns its grid and the catalog is shared read-only, so seeds
//! are rendered on the rayon pool without locking.

use rayon::prelude::*;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::generator::{Avatar, AvatarGenerator};
use crate::output::{self, avatar_stem, OutputError};

/// Result of writing one seeded avatar
#[derive(Debug)]
pub struct BatchItem {
    pub seed: String,
    pub png_path: PathBuf,
    pub result: Result<(), OutputError>,
}

/// Read seeds from a line-oriented source.
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed.
pub fn read_seeds<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut seeds = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let seed = line.trim();
        if seed.is_empty() || seed.starts_with('#') {
            continue;
        }
        seeds.push(seed.to_string());
    }
    Ok(seeds)
}

/// Generate one avatar per seed, in input order.
pub fn generate_all(generator: &AvatarGenerator<'_>, seeds: &[String]) -> Vec<Avatar> {
    seeds.par_iter().map(|seed| generator.generate_from_seed(seed)).collect()
}

/// Generate and save one PNG per seed into `dir`, plus trait JSON when
/// `write_traits` is set. Results are returned in input order.
///
/// Each seed gets its own file. When a seed's `{species}_{hex}` stem is
/// already taken, it is written as `{stem}_{n}`, counting up from its
/// position in `seeds` to the first free name.
pub fn write_all(
    generator: &AvatarGenerator<'_>,
    seeds: &[String],
    dir: &Path,
    write_traits: bool,
) -> Vec<BatchItem> {
    let avatars = generate_all(generator, seeds);

    let mut taken = HashSet::new();
    let paths: Vec<PathBuf> = seeds
        .iter()
        .zip(&avatars)
        .enumerate()
        .map(|(index, (seed, avatar))| {
            let stem = avatar_stem(Some(seed), avatar.traits.species.name());
            let mut path = dir.join(format!("{}.png", stem));
            let mut suffix = index;
            while !taken.insert(path.clone()) {
                path = dir.join(format!("{}_{}.png", stem, suffix));
                suffix += 1;
            }
            path
        })
        .collect();

    seeds
        .par_iter()
        .zip(avatars.par_iter())
        .zip(paths.into_par_iter())
        .map(|((seed, avatar), png_path)| {
            let result = save_avatar(avatar, &png_path, write_traits);
            BatchItem { seed: seed.clone(), png_path, result }
        })
        .collect()
}

/// Save an avatar's PNG and, optionally, its trait record next to it.
pub fn save_avatar(avatar: &Avatar, png_path: &Path, write_traits: bool) -> Result<(), OutputError> {
    avatar.save_png(png_path)?;
    if write_traits {
        let json = serde_json::to_string_pretty(&avatar.traits)
            .map_err(|e| OutputError::Io(e.into()))?;
        std::fs::write(output::traits_path(png_path), json + "\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_seeds_skips_blank_and_comments() {
        let input = "0xabc123def456\n\n# comment\n  0x000000000000  \n";
        let seeds = read_seeds(Cursor::new(input)).unwrap();
        assert_eq!(seeds, vec!["0xabc123def456", "0x000000000000"]);
    }

    #[test]
    fn test_generate_all_matches_sequential() {
        let generator = AvatarGenerator::new();
        let seeds: Vec<String> = (0..16).map(|i| format!("0x{:012x}", i * 0x1111_1111u64)).collect();
        let avatars = generate_all(&generator, &seeds);
        assert_eq!(avatars.len(), seeds.len());
        for (seed, avatar) in seeds.iter().zip(&avatars) {
            let expected = generator.generate_from_seed(seed);
            assert_eq!(avatar.traits, expected.traits);
            assert_eq!(avatar.grid, expected.grid);
        }
    }

    #[test]
    fn test_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let generator = AvatarGenerator::new().with_pixel_scale(1);
        let seeds = vec!["0x010203040506".to_string(), "0x000000000000".to_string()];

        let items = write_all(&generator, &seeds, dir.path(), true);
        assert_eq!(items.len(), 2);
        for item in &items {
            assert!(item.result.is_ok());
            assert!(item.png_path.exists());
            let json = std::fs::read_to_string(item.png_path.with_extension("json")).unwrap();
            let record: crate::models::TraitRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record, generator.generate_from_seed(&item.seed).traits);
        }
        assert_eq!(items[1].png_path, dir.path().join("lobster_000000000000.png"));
    }

    #[test]
    fn test_write_all_keeps_colliding_stems_apart() {
        let dir = tempfile::tempdir().unwrap();
        let generator = AvatarGenerator::new().with_pixel_scale(1);
        // Both seeds clean up to the stem "lobster_012345" but select different traits
        let seeds = vec![
            "0x0-1-2-3-4-5".to_string(),
            "0x012345".to_string(),
            "0x012345".to_string(),
        ];
        assert_ne!(
            generator.generate_from_seed(&seeds[0]).traits,
            generator.generate_from_seed(&seeds[1]).traits
        );

        let items = write_all(&generator, &seeds, dir.path(), true);
        assert_eq!(items[0].png_path, dir.path().join("lobster_012345.png"));
        assert_eq!(items[1].png_path, dir.path().join("lobster_012345_1.png"));
        assert_eq!(items[2].png_path, dir.path().join("lobster_012345_2.png"));

        for item in &items {
            assert!(item.result.is_ok());
            let json = std::fs::read_to_string(item.png_path.with_extension("json")).unwrap();
            let record: crate::models::TraitRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record, generator.generate_from_seed(&item.seed).traits);
        }
    }

    #[test]
    fn test_write_all_suffix_skips_taken_stems() {
        let dir = tempfile::tempdir().unwrap();
        let generator = AvatarGenerator::new().with_pixel_scale(1);
        // "0x2" is short, so it is a lobster with stem "lobster_2"
        let seeds = vec!["0x2".to_string(), "0x".to_string(), "0x".to_string()];

        let items = write_all(&generator, &seeds, dir.path(), false);
        assert_eq!(items[0].png_path, dir.path().join("lobster_2.png"));
        assert_eq!(items[1].png_path, dir.path().join("lobster.png"));
        assert_eq!(items[2].png_path, dir.path().join("lobster_3.png"));
        assert!(items.iter().all(|item| item.result.is_ok()));
    }
}
