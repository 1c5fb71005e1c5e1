mod type_resolution;
