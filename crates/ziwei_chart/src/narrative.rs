//! Fortune-text generation for the Life sector.
//!
//! The narrative interpolates the year-sign (zodiac animal of the birth
//! year), the gender label, the Life sector's star names, and one phrase
//! drawn from each of three fixed vocabularies into a single templated
//! sentence, closed by the calculator's fixed advice line.

use rand::Rng;

use ziwei_base::birth::Gender;
use ziwei_base::ganzhi::year_branch;

use crate::chart::Sector;

const ADJECTIVES: [&str; 4] = ["充满变数", "平稳顺利", "机遇连连", "挑战重重"];
const DOMAINS: [&str; 4] = ["事业", "感情", "财运", "健康"];
const OUTCOMES: [&str; 4] = ["大有可为", "需谨慎行事", "将获贵人相助", "宜守不宜攻"];

fn pick<R: Rng>(table: &[&'static str], rng: &mut R) -> &'static str {
    table[rng.gen_range(0..table.len())]
}

/// Build the fortune narrative for the Life sector.
///
/// Never returns an empty string; always contains the year-sign and gender
/// labels. A Life sector with no stars joins to the empty string in the
/// star position (degenerate but accepted).
pub fn fortune_text<R: Rng>(
    life_sector: &Sector,
    birth_year: i32,
    gender: Gender,
    rng: &mut R,
) -> String {
    let animal = year_branch(birth_year).animal();
    let gender = gender.label();
    let stars = life_sector.star_names().join("、");
    let adjective = pick(&ADJECTIVES, rng);
    let domain = pick(&DOMAINS, rng);
    let outcome = pick(&OUTCOMES, rng);
    format!(
        "身为{animal}年{gender}性，命宫主星{stars}。\
         {birth_year}年运势{adjective}，尤其在{domain}领域{outcome}。\
         需注意人际关系维护，把握秋季关键机遇。"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ziwei_base::palace::Palace;
    use ziwei_base::star::{MajorStar, MinorStar, Star};

    fn life_sector() -> Sector {
        let mut sector = Sector::empty(Palace::Travel);
        sector.stars.push(Star::Major(MajorStar::ZiWei));
        sector.stars.push(Star::Minor(MinorStar::WenChang));
        sector
    }

    #[test]
    fn contains_year_sign_and_gender() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let text = fortune_text(&life_sector(), 2024, Gender::Male, &mut rng);
        assert!(!text.is_empty());
        assert!(text.contains("猴"), "{text}");
        assert!(text.contains("男"), "{text}");
        assert!(text.contains("2024"), "{text}");
    }

    #[test]
    fn joins_star_names_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let text = fortune_text(&life_sector(), 2024, Gender::Female, &mut rng);
        assert!(text.contains("紫微、文昌"), "{text}");
    }

    #[test]
    fn draws_one_phrase_per_vocabulary() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let text = fortune_text(&life_sector(), 1990, Gender::Female, &mut rng);
        assert_eq!(ADJECTIVES.iter().filter(|a| text.contains(**a)).count(), 1);
        assert_eq!(OUTCOMES.iter().filter(|o| text.contains(**o)).count(), 1);
    }

    #[test]
    fn starless_life_sector_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let text = fortune_text(&Sector::empty(Palace::Life), 2000, Gender::Male, &mut rng);
        assert!(!text.is_empty());
        assert!(text.contains("龙"), "{text}");
    }

    #[test]
    fn seeded_draw_is_reproducible() {
        let a = fortune_text(
            &life_sector(),
            2024,
            Gender::Male,
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        let b = fortune_text(
            &life_sector(),
            2024,
            Gender::Male,
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        assert_eq!(a, b);
    }
}
