pub mod paths; // Object key derivation for split, autotag and merge stages
