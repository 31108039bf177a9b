use super::*;

#[test]
fn pulse_starts_idle_without_class() {
    let pulse = PulseState::default();
    assert!(!pulse.is_active());
    assert_eq!(pulse.class(), "");
}

#[test]
fn start_then_finish_clears_the_pulse() {
    let mut pulse = PulseState::default();
    let seq = pulse.start();
    assert!(pulse.is_active());
    assert!(!pulse.class().is_empty());
    pulse.finish(seq);
    assert!(!pulse.is_active());
    assert_eq!(pulse.class(), "");
}

#[test]
fn stale_timer_does_not_cut_a_newer_pulse_short() {
    let mut pulse = PulseState::default();
    let first = pulse.start();
    let second = pulse.start();
    assert_ne!(first, second);

    pulse.finish(first);
    assert!(pulse.is_active());

    pulse.finish(second);
    assert!(!pulse.is_active());
}

#[test]
fn restart_switches_animation_class() {
    let mut pulse = PulseState::default();
    pulse.start();
    let first = pulse.class();
    pulse.start();
    let second = pulse.class();
    assert_ne!(first, second);
    assert!(first.starts_with("interactive-zone--pulse-"));
    assert!(second.starts_with("interactive-zone--pulse-"));
}
