// Model tests
mod dimension;


mod generator;
