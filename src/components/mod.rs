pub mod neural_field;
