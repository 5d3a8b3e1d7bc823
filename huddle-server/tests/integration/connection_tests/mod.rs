mod test_invalid_room_id_is_rejected;
mod test_peer_ids_are_unique;
mod test_single_peer_joins_room;
