use macroquad::math::Vec2;

/// Axis-aligned box anchored at a sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// 💥 Edges that merely touch still count as a hit
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn square(x: f32, y: f32) -> Hitbox {
        Hitbox::new(vec2(x, y), vec2(10.0, 10.0))
    }

    #[test]
    fn edges_are_derived_from_position_and_size() {
        let b = Hitbox::new(vec2(3.0, 4.0), vec2(13.0, 37.0));
        assert_eq!(b.left(), 3.0);
        assert_eq!(b.right(), 16.0);
        assert_eq!(b.top(), 4.0);
        assert_eq!(b.bottom(), 41.0);
    }

    #[test]
    fn touching_edges_overlap() {
        let a = square(0.0, 0.0);
        assert!(a.overlaps(&square(10.0, 0.0)));
        assert!(a.overlaps(&square(0.0, 10.0)));
        assert!(a.overlaps(&square(10.0, 10.0)));
        assert!(a.overlaps(&square(-10.0, -10.0)));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = square(0.0, 0.0);
        assert!(!a.overlaps(&square(10.5, 0.0)));
        assert!(!a.overlaps(&square(0.0, -10.5)));
        assert!(!a.overlaps(&square(20.0, 20.0)));
    }

    #[test]
    fn overlap_is_symmetric_and_covers_containment() {
        let outer = Hitbox::new(vec2(0.0, 0.0), vec2(100.0, 100.0));
        let inner = square(45.0, 45.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));

        let far = square(200.0, 0.0);
        assert_eq!(outer.overlaps(&far), far.overlaps(&outer));
    }
}
