use quickcheck::{Arbitrary, Gen};

use crate::Card;

// No '-' or '┄', so divider lines can be recognized in the rendered frame.
const LETTERS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'n', 'r', 's', 't', 'l', 'C', 'G', 'W', 'é', '—', ',', '.', '(', ')',
    '{', '}', '+', '*', '/',
];
const MANA_SYMBOLS: &[&str] = &["{W}", "{U}", "{B}", "{R}", "{G}", "{C}", "{X}", "{2}", "{10}", "{G/U}"];
const STATS: &[&str] = &["0", "1", "2", "6", "13", "*", "1+*", "-1", "99"];

fn word(g: &mut Gen) -> String {
    // Mostly short words, sometimes one too long for any text column
    let len = if u8::arbitrary(g) % 10 == 0 {
        30 + usize::arbitrary(g) % 40
    } else {
        1 + usize::arbitrary(g) % 12
    };
    (0..len).map(|_| *g.choose(LETTERS).unwrap()).collect()
}

fn sentence(g: &mut Gen, max_words: usize) -> String {
    let num_words = usize::arbitrary(g) % (max_words + 1);
    (0..num_words).map(|_| word(g)).collect::<Vec<_>>().join(" ")
}

fn paragraphs(g: &mut Gen, max_paragraphs: usize) -> String {
    let num_paragraphs = usize::arbitrary(g) % (max_paragraphs + 1);
    (0..num_paragraphs)
        .map(|_| sentence(g, 20))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        let name = sentence(g, 6);
        let num_symbols = usize::arbitrary(g) % 8;
        let mana_cost: String = (0..num_symbols).map(|_| *g.choose(MANA_SYMBOLS).unwrap()).collect();
        let type_line = sentence(g, 8);
        let oracle_text = paragraphs(g, 4);
        let set_len = 3 + usize::arbitrary(g) % 3;
        let set: String = (0..set_len).map(|_| *g.choose(&['x', 'l', 'n', 'm', '2', '1']).unwrap()).collect();

        let mut card = Card::new(name, mana_cost, type_line, oracle_text, set);
        if bool::arbitrary(g) {
            let power = *g.choose(STATS).unwrap();
            let toughness = *g.choose(STATS).unwrap();
            card = card.with_power_toughness(power, toughness);
        }
        if bool::arbitrary(g) {
            card = card.with_flavor_text(paragraphs(g, 2));
        }
        card
    }
}
