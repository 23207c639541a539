pub mod city;
pub mod edge;
pub mod graph;
