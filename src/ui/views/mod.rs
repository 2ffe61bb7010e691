pub mod mock_exam;
pub mod quiz;
pub mod section;
pub mod welcome;
