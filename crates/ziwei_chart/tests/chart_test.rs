//! End-to-end properties of chart generation.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use ziwei_base::birth::{BirthDate, BirthInput, Gender};
use ziwei_base::error::ChartError;
use ziwei_base::hour::{ALL_TIME_SLOTS, TimeSlot};
use ziwei_base::palace::ALL_PALACES;
use ziwei_base::star::{ALL_MAJOR_STARS, Star};
use ziwei_chart::{
    MINOR_COUNT_MAX, MINOR_COUNT_MIN, cast, describe_chart, generate_chart,
    generate_chart_for_key,
};

fn birth(slot: TimeSlot) -> BirthInput {
    BirthInput::new(BirthDate::new(2024, 5, 1), slot, Gender::Male)
}

#[test]
fn every_slot_rotates_the_canonical_cycle() {
    for slot in ALL_TIME_SLOTS {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let chart = generate_chart(&birth(slot), &mut rng);

        let offset = slot.life_palace_index() as usize;
        assert_eq!(chart.sectors[0].palace, ALL_PALACES[offset], "slot {slot:?}");
        for (i, sector) in chart.sectors.iter().enumerate() {
            assert_eq!(sector.palace, ALL_PALACES[(offset + i) % 12]);
        }

        let names: HashSet<&str> = chart.sectors.iter().map(|s| s.palace.name()).collect();
        assert_eq!(names.len(), 12, "slot {slot:?} produced duplicate palaces");
    }
}

#[test]
fn invalid_slot_keys_are_rejected() {
    for bad in ["", "0-2", "23-01", "midnight", "11-13 "] {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result =
            generate_chart_for_key(BirthDate::new(2024, 5, 1), bad, Gender::Female, &mut rng);
        assert_eq!(
            result,
            Err(ChartError::InvalidTimeSlot(bad.to_string())),
            "key {bad:?}"
        );
    }
}

#[test]
fn identical_seed_and_input_reproduce_the_chart() {
    for seed in [0u64, 1, 42, 2024, u64::MAX] {
        let a = generate_chart(&birth(TimeSlot::You), &mut ChaCha8Rng::seed_from_u64(seed));
        let b = generate_chart(&birth(TimeSlot::You), &mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn life_sector_minor_count_within_bounds() {
    for seed in 0..100u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chart = generate_chart(&birth(TimeSlot::Chen), &mut rng);

        let life = chart.life_sector();
        let minors: Vec<Star> = life.stars.iter().copied().filter(|s| !s.is_major()).collect();
        assert!(
            (MINOR_COUNT_MIN..=MINOR_COUNT_MAX).contains(&minors.len()),
            "seed {seed}: {} minors",
            minors.len()
        );
        let unique: HashSet<Star> = minors.iter().copied().collect();
        assert_eq!(unique.len(), minors.len(), "seed {seed}: duplicate minors");

        // Minor stars never land outside the Life sector; every other
        // sector holds exactly its one dealt major.
        for sector in &chart.sectors[1..] {
            assert_eq!(sector.stars.len(), 1);
            assert!(sector.stars[0].is_major());
        }
    }
}

#[test]
fn major_deal_matches_replayed_shuffle() {
    let seed = 77u64;
    let mut expected = ALL_MAJOR_STARS;
    expected.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let chart = generate_chart(&birth(TimeSlot::Zi), &mut rng);

    assert_eq!(chart.sectors[0].stars[0], Star::Major(expected[0]));
    assert_eq!(chart.sectors[11].stars[0], Star::Major(expected[11]));
    for leftover in &expected[12..] {
        let placed = chart
            .sectors
            .iter()
            .any(|s| s.stars.contains(&Star::Major(*leftover)));
        assert!(!placed, "{} should stay unplaced", leftover.name());
    }
}

#[test]
fn narrative_carries_year_sign_and_gender() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let chart = generate_chart(&birth(TimeSlot::Wu), &mut rng);
    let text = describe_chart(&chart, 2024, Gender::Female, &mut rng);
    assert!(!text.is_empty());
    assert!(text.contains("猴"), "{text}");
    assert!(text.contains("女"), "{text}");
    for name in chart.life_sector().star_names() {
        assert!(text.contains(name), "{text} missing {name}");
    }
}

#[test]
fn cast_report_matches_original_output_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let input = BirthInput::new(BirthDate::new(1988, 2, 29), TimeSlot::Hai, Gender::Female);
    let report = cast(&input, &mut rng);

    assert_eq!(report.birth_date_label, "1988年2月29日");
    assert_eq!(report.time_slot.key(), "21-23");
    assert_eq!(report.gender_label, "女");
    assert_eq!(report.chart.sectors[0].palace, ALL_PALACES[11]);
    // 1988 -> (1988 - 4) mod 12 = 4 -> 龙
    assert!(report.fortune_text.contains("龙"), "{}", report.fortune_text);
}
