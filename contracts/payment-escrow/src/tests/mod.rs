mod test_escrow;
