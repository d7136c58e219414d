use serde::Serialize;

use crate::cursor::Cursor;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
  Advance,
  Retreat,
}

/// Turns the horizontal distance of a finished drag into a single cursor step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
  threshold: f64,
}

impl SwipeGesture {
  pub fn new(threshold: f64) -> Self {
    Self {
      threshold: threshold.abs(),
    }
  }

  pub fn threshold(&self) -> f64 {
    self.threshold
  }

  /// Dragging left past the threshold shows the next card, dragging right the previous one.
  pub fn classify(&self, dx: f64) -> Option<SwipeAction> {
    if dx < -self.threshold {
      Some(SwipeAction::Advance)
    } else if dx > self.threshold {
      Some(SwipeAction::Retreat)
    } else {
      None
    }
  }

  pub fn apply(&self, cursor: &mut Cursor, dx: f64) -> bool {
    match self.classify(dx) {
      Some(SwipeAction::Advance) => cursor.advance(),
      Some(SwipeAction::Retreat) => cursor.retreat(),
      None => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_is_exclusive() {
    let swipe = SwipeGesture::new(50.0);
    assert_eq!(swipe.classify(-50.0), None);
    assert_eq!(swipe.classify(50.0), None);
    assert_eq!(swipe.classify(-50.5), Some(SwipeAction::Advance));
    assert_eq!(swipe.classify(120.0), Some(SwipeAction::Retreat));
    assert_eq!(swipe.classify(0.0), None);
  }

  #[test]
  fn negative_threshold_is_normalized() {
    let swipe = SwipeGesture::new(-30.0);
    assert_eq!(swipe.threshold(), 30.0);
    assert_eq!(swipe.classify(-31.0), Some(SwipeAction::Advance));
  }
}
