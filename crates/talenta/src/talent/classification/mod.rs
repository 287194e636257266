mod nine_box;
mod scale;

pub use nine_box::{
    box_number_for, category_for, classify, is_top_talent_box, recommendation_for, BoxPlacement,
    UNCLASSIFIED_BOX,
};
pub use scale::{scale, Tier};
