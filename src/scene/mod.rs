mod practice;

pub use practice::PracticeScene;
