mod advice;
mod common;
