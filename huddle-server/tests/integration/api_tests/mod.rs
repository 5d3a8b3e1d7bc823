mod test_get_info;
mod test_room_lifecycle;
