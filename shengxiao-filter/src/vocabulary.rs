use std::collections::HashMap;

use shengxiao_db::models::{Element, NumberRecord, Parity, WaveColor, ZodiacSign, ALL_ZODIACS};

use crate::tokens::{classify, Category};

pub type Predicate = Box<dyn Fn(&NumberRecord) -> bool + Send + Sync>;

/// Un libellé activable et le prédicat qu'il applique à chaque numéro.
pub struct TokenRule {
    pub token: String,
    pub category: Category,
    predicate: Predicate,
}

impl TokenRule {
    pub fn matches(&self, record: &NumberRecord) -> bool {
        (self.predicate)(record)
    }
}

impl std::fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRule")
            .field("token", &self.token)
            .field("category", &self.category)
            .finish()
    }
}

/// Seuil « grand » : 25-49 sont grands, 1-24 petits.
pub const BIG_MIN_ID: u32 = 25;
pub const BIG_MIN_SUM: u32 = 7;
pub const BIG_MIN_TAIL: u32 = 5;

const FRONT: &[ZodiacSign] = &[
    ZodiacSign::Rat, ZodiacSign::Ox, ZodiacSign::Tiger,
    ZodiacSign::Rabbit, ZodiacSign::Dragon, ZodiacSign::Snake,
];
const BACK: &[ZodiacSign] = &[
    ZodiacSign::Horse, ZodiacSign::Goat, ZodiacSign::Monkey,
    ZodiacSign::Rooster, ZodiacSign::Dog, ZodiacSign::Pig,
];
const LEFT: &[ZodiacSign] = &[
    ZodiacSign::Rat, ZodiacSign::Ox, ZodiacSign::Dragon,
    ZodiacSign::Snake, ZodiacSign::Monkey, ZodiacSign::Rooster,
];
const RIGHT: &[ZodiacSign] = &[
    ZodiacSign::Tiger, ZodiacSign::Rabbit, ZodiacSign::Horse,
    ZodiacSign::Goat, ZodiacSign::Dog, ZodiacSign::Pig,
];
const SINGLE_CHAR: &[ZodiacSign] = &[
    ZodiacSign::Rat, ZodiacSign::Ox, ZodiacSign::Tiger, ZodiacSign::Rabbit,
    ZodiacSign::Horse, ZodiacSign::Goat, ZodiacSign::Dog, ZodiacSign::Pig,
];
const MULTI_CHAR: &[ZodiacSign] = &[
    ZodiacSign::Dragon, ZodiacSign::Snake, ZodiacSign::Monkey, ZodiacSign::Rooster,
];

fn is_big(record: &NumberRecord) -> bool {
    record.id >= BIG_MIN_ID
}

fn is_parity(record: &NumberRecord, parity: Parity) -> bool {
    record.parity() == Some(parity)
}

fn sign_in(record: &NumberRecord, signs: &[ZodiacSign]) -> bool {
    record.zodiac().is_some_and(|z| signs.contains(&z))
}

fn text_is(field: &Option<String>, expected: &str) -> bool {
    field.as_deref() == Some(expected)
}

/// Table libellé → (catégorie, prédicat), construite une seule fois.
pub struct Vocabulary {
    rules: Vec<TokenRule>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Ajoute un libellé ; sa catégorie vient de `classify`.
    pub fn add<F>(&mut self, token: impl Into<String>, predicate: F)
    where
        F: Fn(&NumberRecord) -> bool + Send + Sync + 'static,
    {
        let token = token.into();
        let category = classify(&token);
        if let Some(&idx) = self.index.get(&token) {
            self.rules[idx].predicate = Box::new(predicate);
            return;
        }
        self.index.insert(token.clone(), self.rules.len());
        self.rules.push(TokenRule {
            token,
            category,
            predicate: Box::new(predicate),
        });
    }

    pub fn standard() -> Self {
        let mut v = Self::empty();

        v.add("单", |r| is_parity(r, Parity::Odd));
        v.add("双", |r| is_parity(r, Parity::Even));
        v.add("大", is_big);
        v.add("小", |r| !is_big(r));

        for (token, color) in [("红波", WaveColor::Red), ("绿波", WaveColor::Green), ("蓝波", WaveColor::Blue)] {
            v.add(token, move |r| r.wave() == Some(color));
        }

        v.add("家禽", |r| text_is(&r.poultry_beast, "家禽"));
        v.add("野兽", |r| text_is(&r.poultry_beast, "野兽"));

        v.add("合单", |r| text_is(&r.sum_odd_and_even, "oddSum"));
        v.add("合双", |r| text_is(&r.sum_odd_and_even, "evenSum"));
        v.add("合大", |r| r.sum.is_some_and(|s| s >= BIG_MIN_SUM));
        v.add("合小", |r| r.sum.is_some_and(|s| s < BIG_MIN_SUM));
        v.add("尾大", |r| r.tail.is_some_and(|t| t >= BIG_MIN_TAIL));
        v.add("尾小", |r| r.tail.is_some_and(|t| t < BIG_MIN_TAIL));

        v.add("大单", |r| is_big(r) && is_parity(r, Parity::Odd));
        v.add("小单", |r| !is_big(r) && is_parity(r, Parity::Odd));
        v.add("大双", |r| is_big(r) && is_parity(r, Parity::Even));
        v.add("小双", |r| !is_big(r) && is_parity(r, Parity::Even));

        for element in [Element::Metal, Element::Wood, Element::Water, Element::Fire, Element::Earth] {
            v.add(element.label(), move |r| r.element() == Some(element));
        }

        for (color, color_label) in [(WaveColor::Red, "红"), (WaveColor::Green, "绿"), (WaveColor::Blue, "蓝")] {
            for (parity, parity_label) in [(Parity::Odd, "单"), (Parity::Even, "双")] {
                v.add(format!("{color_label}{parity_label}"), move |r| {
                    r.wave() == Some(color) && is_parity(r, parity)
                });
            }
        }

        for sign in ALL_ZODIACS {
            v.add(sign.label(), move |r| r.zodiac() == Some(sign));
        }

        for tail in 0..=9u32 {
            v.add(format!("{tail}尾"), move |r| r.tail == Some(tail));
        }
        for head in 0..=4u32 {
            v.add(format!("{head}头"), move |r| r.head == Some(head));
        }
        for men in 1..=5u32 {
            let label = format!("{men}门");
            let expected = label.clone();
            v.add(label, move |r| text_is(&r.men, &expected));
        }
        for duan in 1..=7u32 {
            let label = format!("{duan}段");
            let expected = label.clone();
            v.add(label, move |r| text_is(&r.duan, &expected));
        }
        for he in 1..=13u32 {
            let expected = format!("合{he:02}");
            v.add(format!("{he}合"), move |r| text_is(&r.he_shu, &expected));
        }

        v.add("天肖", |r| text_is(&r.sky_earth, "天肖"));
        v.add("地肖", |r| text_is(&r.sky_earth, "地肖"));
        v.add("阴肖", |r| text_is(&r.yin_yang, "阴性") || text_is(&r.yin_yang, "阴肖"));
        v.add("阳肖", |r| text_is(&r.yin_yang, "阳性") || text_is(&r.yin_yang, "阳肖"));

        v.add("左肖", |r| sign_in(r, LEFT));
        v.add("右肖", |r| sign_in(r, RIGHT));
        v.add("前肖", |r| sign_in(r, FRONT));
        v.add("后肖", |r| sign_in(r, BACK));
        v.add("独字肖", |r| sign_in(r, SINGLE_CHAR));
        v.add("合字肖", |r| sign_in(r, MULTI_CHAR));

        v
    }

    pub fn get(&self, token: &str) -> Option<&TokenRule> {
        self.index.get(token).map(|&idx| &self.rules[idx])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Libellé hors vocabulaire : ne correspond à rien.
    pub fn matches(&self, record: &NumberRecord, token: &str) -> bool {
        self.get(token).is_some_and(|rule| rule.matches(record))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Libellés regroupés par catégorie, dans l'ordre de déclaration.
    pub fn grouped(&self) -> Vec<(Category, Vec<&str>)> {
        let mut groups: Vec<(Category, Vec<&str>)> = Vec::new();
        for rule in &self.rules {
            match groups.iter_mut().find(|(c, _)| *c == rule.category) {
                Some((_, tokens)) => tokens.push(rule.token.as_str()),
                None => groups.push((rule.category, vec![rule.token.as_str()])),
            }
        }
        groups
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
