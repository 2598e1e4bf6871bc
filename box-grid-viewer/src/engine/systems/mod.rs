/// HUD overlay: FPS counter and last-picked-colour readout.
pub mod hud;
