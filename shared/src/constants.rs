pub const LABELS_KEY: &str = "wheelLabels";
pub const THEME_KEY: &str = "theme";

pub const DEFAULT_LABELS: [&str; 3] = ["Yes", "No", "Maybe"];

// Pastel fill for wheel slices, picked by slice position
pub const SLICE_PALETTE: [&str; 16] = [
    "#FFCDD2", "#F8BBD0", "#E1BEE7", "#D1C4E9",
    "#C5CAE9", "#BBDEFB", "#B3E5FC", "#B2EBF2",
    "#B2DFDB", "#C8E6C9", "#DCEDC8", "#F0F4C3",
    "#FFECB3", "#FFE0B2", "#FFCCBC", "#D7CCC8",
];

pub const CONFETTI_PALETTE: [&str; 16] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7",
    "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4caf50", "#8bc34a", "#cddc39",
    "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
];
