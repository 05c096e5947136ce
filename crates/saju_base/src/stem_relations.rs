//! Stem combinations (cheongan hap) and stem clashes (cheongan chung).

use crate::phase::Phase;
use crate::stem::Stem;

/// Phase produced when two stems combine, or None if they do not combine.
///
/// Jia-Ji → earth, Yi-Geng → metal, Bing-Xin → water, Ding-Ren → wood,
/// Wu-Gui → fire. Order-insensitive.
pub const fn stem_combine(a: Stem, b: Stem) -> Option<Phase> {
    use Stem::*;

    match (a, b) {
        (Jia, Ji) | (Ji, Jia) => Some(Phase::Earth),
        (Yi, Geng) | (Geng, Yi) => Some(Phase::Metal),
        (Bing, Xin) | (Xin, Bing) => Some(Phase::Water),
        (Ding, Ren) | (Ren, Ding) => Some(Phase::Wood),
        (Wu, Gui) | (Gui, Wu) => Some(Phase::Fire),
        _ => None,
    }
}

/// Whether two stems clash: Jia-Geng, Yi-Xin, Bing-Ren, Ding-Gui.
pub const fn stem_clash(a: Stem, b: Stem) -> bool {
    use Stem::*;

    matches!(
        (a, b),
        (Jia, Geng)
            | (Geng, Jia)
            | (Yi, Xin)
            | (Xin, Yi)
            | (Bing, Ren)
            | (Ren, Bing)
            | (Ding, Gui)
            | (Gui, Ding)
    )
}
