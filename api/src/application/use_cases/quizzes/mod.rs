pub mod play_quiz;
