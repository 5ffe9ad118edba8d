use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBand {
    pub lower: Bound,
    pub upper: Bound,
    pub label: &'static str,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<&'static str>,
}

impl CategoryBand {
    pub fn contains(&self, score: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Inclusive(v) => score >= v,
            Bound::Exclusive(v) => score > v,
            Bound::Unbounded => true,
        };
        let below_upper = match self.upper {
            Bound::Inclusive(v) => score <= v,
            Bound::Exclusive(v) => score < v,
            Bound::Unbounded => true,
        };
        above_lower && below_upper
    }
}

pub fn classify(bands: &'static [CategoryBand], score: f64) -> Option<(usize, &'static CategoryBand)> {
    bands.iter().enumerate().find(|(_, band)| band.contains(score))
}

// each band must start where the previous one stops, with opposite inclusivity
pub fn is_contiguous(bands: &[CategoryBand]) -> bool {
    bands.windows(2).all(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        match (prev.upper, next.lower) {
            (Bound::Inclusive(a), Bound::Exclusive(b)) => a == b,
            (Bound::Exclusive(a), Bound::Inclusive(b)) => a == b,
            _ => false,
        }
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
