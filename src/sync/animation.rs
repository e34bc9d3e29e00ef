//! Kooperatives Property-Tweening für Mirrors (Smoothstep-Easing).
//!
//! Pro (Mirror, Property) läuft höchstens ein Tween; ein neuer Start
//! ersetzt den laufenden (Last-write-wins statt zweier konkurrierender
//! Animationen auf derselben Property).

use std::collections::HashMap;

/// Smoothstep-Easing: `p² · (3 − 2p)` auf [0, 1].
pub fn smoothstep(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Animierbare skalare Mirror-Property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Aufhängehöhe (y-Position in Metern)
    Height,
    /// Rotation um die y-Achse (Radiant)
    RotationY,
}

#[derive(Debug, Clone)]
struct Tween {
    start: f32,
    end: f32,
    duration_s: f32,
    elapsed_s: f32,
}

impl Tween {
    fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed_s = (self.elapsed_s + dt).min(self.duration_s);
        let progress = if self.duration_s <= 0.0 {
            1.0
        } else {
            self.elapsed_s / self.duration_s
        };
        self.start + (self.end - self.start) * smoothstep(progress)
    }

    fn finished(&self) -> bool {
        self.elapsed_s >= self.duration_s
    }
}

/// Tween-Verwaltung; getickt aus der Frame-Schleife.
#[derive(Debug, Default)]
pub struct Animator {
    tweens: HashMap<(u64, TweenTarget), Tween>,
}

impl Animator {
    /// Erstellt einen leeren Animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet ein Tween; ein laufendes Tween derselben Property wird ersetzt.
    pub fn start(&mut self, id: u64, target: TweenTarget, from: f32, to: f32, duration_s: f32) {
        self.tweens.insert(
            (id, target),
            Tween {
                start: from,
                end: to,
                duration_s,
                elapsed_s: 0.0,
            },
        );
    }

    /// Bricht alle Tweens eines Mirrors ab (z.B. beim Entfernen).
    pub fn cancel_all(&mut self, id: u64) {
        self.tweens.retain(|(tween_id, _), _| *tween_id != id);
    }

    /// Tickt alle Tweens um `dt` Sekunden weiter und liefert die
    /// aktuellen Werte; abgeschlossene Tweens werden entfernt.
    pub fn tick(&mut self, dt: f32) -> Vec<(u64, TweenTarget, f32)> {
        let mut updates = Vec::with_capacity(self.tweens.len());
        self.tweens.retain(|&(id, target), tween| {
            let value = tween.advance(dt);
            updates.push((id, target, value));
            !tween.finished()
        });
        updates
    }

    /// Anzahl aktiver Tweens.
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_smoothstep_endpoints_and_midpoint() {
        assert_abs_diff_eq!(smoothstep(0.0), 0.0);
        assert_abs_diff_eq!(smoothstep(1.0), 1.0);
        assert_abs_diff_eq!(smoothstep(0.5), 0.5);
        // Außerhalb [0,1] geklemmt
        assert_abs_diff_eq!(smoothstep(2.0), 1.0);
    }

    #[test]
    fn test_tween_reaches_target_and_is_removed() {
        let mut animator = Animator::new();
        animator.start(1, TweenTarget::Height, 1.5, 0.5, 1.0);

        let updates = animator.tick(0.5);
        assert_eq!(updates.len(), 1);
        assert_abs_diff_eq!(updates[0].2, 1.0); // Mittelwert bei p=0.5

        let updates = animator.tick(0.5);
        assert_abs_diff_eq!(updates[0].2, 0.5);
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_restart_replaces_running_tween() {
        let mut animator = Animator::new();
        animator.start(1, TweenTarget::Height, 0.0, 10.0, 1.0);
        animator.tick(0.25);

        // Neuer Start auf derselben Property gewinnt
        animator.start(1, TweenTarget::Height, 5.0, 0.0, 1.0);
        assert_eq!(animator.active_count(), 1);
        let updates = animator.tick(1.0);
        assert_abs_diff_eq!(updates[0].2, 0.0);
    }

    #[test]
    fn test_cancel_all_for_mirror() {
        let mut animator = Animator::new();
        animator.start(1, TweenTarget::Height, 0.0, 1.0, 1.0);
        animator.start(1, TweenTarget::RotationY, 0.0, 1.0, 1.0);
        animator.start(2, TweenTarget::Height, 0.0, 1.0, 1.0);

        animator.cancel_all(1);
        assert_eq!(animator.active_count(), 1);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut animator = Animator::new();
        animator.start(7, TweenTarget::RotationY, 0.0, 2.0, 0.0);
        let updates = animator.tick(0.016);
        assert_abs_diff_eq!(updates[0].2, 2.0);
        assert_eq!(animator.active_count(), 0);
    }
}
